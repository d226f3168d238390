//! Backend gateway: the traits the services speak, and the reqwest
//! transport that implements them.
//!
//! Reader traits cover list and stats fetches; writer traits cover the
//! mutations. Everything is trait-shaped so services stay testable against
//! mocks, the same split the persistence layer of a server would use.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::kyc::{KycKybStats, KycRecord, VerificationTrack};
use crate::domain::profile::{AdminProfile, UpdateProfile};
use crate::domain::stats::DashboardStats;
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::domain::team::{NewTeamMember, SalesDashboard, TeamMember, UpdateTeamMember};
use crate::domain::transaction::{Transaction, TransactionStats};
use crate::domain::types::{KycRecordId, SubscriptionId, TeamMemberId, UserId};
use crate::domain::user::{User, UserStats, UserStatus};
use crate::listview::{FetchResult, PageResult, RequestDescriptor};

pub mod client;
pub mod dashboard;
pub mod kyc;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod profile;
pub mod session;
pub mod subscriptions;
pub mod team;
pub mod transactions;
pub mod users;

pub use client::ApiClient;
pub use session::{MemorySession, SessionStore};

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn list_users(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>>;
    async fn user_stats(&self) -> FetchResult<UserStats>;
}

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn delete_user(&self, id: &UserId) -> FetchResult<()>;
    async fn set_user_status(&self, id: &UserId, status: UserStatus) -> FetchResult<()>;
}

#[async_trait]
pub trait TransactionReader: Send + Sync {
    async fn list_transactions(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Transaction>>;
    async fn transaction_stats(&self) -> FetchResult<TransactionStats>;
}

#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    async fn list_subscriptions(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Subscription>>;
    async fn subscription_stats(&self) -> FetchResult<Value>;
}

#[async_trait]
pub trait SubscriptionWriter: Send + Sync {
    async fn set_subscription_status(
        &self,
        id: &SubscriptionId,
        status: SubscriptionStatus,
    ) -> FetchResult<()>;
}

#[async_trait]
pub trait VerificationReader: Send + Sync {
    async fn list_verifications(
        &self,
        track: VerificationTrack,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<KycRecord>>;
    async fn verification_stats(&self) -> FetchResult<KycKybStats>;
}

#[async_trait]
pub trait VerificationWriter: Send + Sync {
    async fn approve_verification(
        &self,
        track: VerificationTrack,
        id: &KycRecordId,
    ) -> FetchResult<()>;
    async fn reject_verification(
        &self,
        track: VerificationTrack,
        id: &KycRecordId,
        reason: &str,
    ) -> FetchResult<()>;
}

#[async_trait]
pub trait TeamReader: Send + Sync {
    async fn list_team(&self) -> FetchResult<Vec<TeamMember>>;
    async fn sales_dashboard(&self) -> FetchResult<SalesDashboard>;
}

#[async_trait]
pub trait TeamWriter: Send + Sync {
    async fn create_team_member(&self, member: &NewTeamMember) -> FetchResult<()>;
    async fn update_team_member(
        &self,
        id: &TeamMemberId,
        updates: &UpdateTeamMember,
    ) -> FetchResult<()>;
    async fn delete_team_member(&self, id: &TeamMemberId) -> FetchResult<()>;
}

#[async_trait]
pub trait DashboardReader: Send + Sync {
    async fn dashboard_stats(&self) -> FetchResult<DashboardStats>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn profile(&self) -> FetchResult<AdminProfile>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn update_profile(&self, updates: &UpdateProfile) -> FetchResult<()>;
}
