//! Mock gateway implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::api::{
    DashboardReader, ProfileReader, ProfileWriter, SubscriptionReader, SubscriptionWriter,
    TeamReader, TeamWriter, TransactionReader, UserReader, UserWriter, VerificationReader,
    VerificationWriter,
};
use crate::domain::kyc::{KycKybStats, KycRecord, VerificationTrack};
use crate::domain::profile::{AdminProfile, UpdateProfile};
use crate::domain::stats::DashboardStats;
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::domain::team::{NewTeamMember, SalesDashboard, TeamMember, UpdateTeamMember};
use crate::domain::transaction::{Transaction, TransactionStats};
use crate::domain::types::{KycRecordId, SubscriptionId, TeamMemberId, UserId};
use crate::domain::user::{User, UserStats, UserStatus};
use crate::listview::{FetchResult, PageResult, RequestDescriptor};

mock! {
    pub Api {}

    #[async_trait]
    impl UserReader for Api {
        async fn list_users(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>>;
        async fn user_stats(&self) -> FetchResult<UserStats>;
    }

    #[async_trait]
    impl UserWriter for Api {
        async fn delete_user(&self, id: &UserId) -> FetchResult<()>;
        async fn set_user_status(&self, id: &UserId, status: UserStatus) -> FetchResult<()>;
    }

    #[async_trait]
    impl TransactionReader for Api {
        async fn list_transactions(
            &self,
            descriptor: &RequestDescriptor,
        ) -> FetchResult<PageResult<Transaction>>;
        async fn transaction_stats(&self) -> FetchResult<TransactionStats>;
    }

    #[async_trait]
    impl SubscriptionReader for Api {
        async fn list_subscriptions(
            &self,
            descriptor: &RequestDescriptor,
        ) -> FetchResult<PageResult<Subscription>>;
        async fn subscription_stats(&self) -> FetchResult<Value>;
    }

    #[async_trait]
    impl SubscriptionWriter for Api {
        async fn set_subscription_status(
            &self,
            id: &SubscriptionId,
            status: SubscriptionStatus,
        ) -> FetchResult<()>;
    }

    #[async_trait]
    impl VerificationReader for Api {
        async fn list_verifications(
            &self,
            track: VerificationTrack,
            descriptor: &RequestDescriptor,
        ) -> FetchResult<PageResult<KycRecord>>;
        async fn verification_stats(&self) -> FetchResult<KycKybStats>;
    }

    #[async_trait]
    impl VerificationWriter for Api {
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
    impl TeamReader for Api {
        async fn list_team(&self) -> FetchResult<Vec<TeamMember>>;
        async fn sales_dashboard(&self) -> FetchResult<SalesDashboard>;
    }

    #[async_trait]
    impl TeamWriter for Api {
        async fn create_team_member(&self, member: &NewTeamMember) -> FetchResult<()>;
        async fn update_team_member(
            &self,
            id: &TeamMemberId,
            updates: &UpdateTeamMember,
        ) -> FetchResult<()>;
        async fn delete_team_member(&self, id: &TeamMemberId) -> FetchResult<()>;
    }

    #[async_trait]
    impl DashboardReader for Api {
        async fn dashboard_stats(&self) -> FetchResult<DashboardStats>;
    }

    #[async_trait]
    impl ProfileReader for Api {
        async fn profile(&self) -> FetchResult<AdminProfile>;
    }

    #[async_trait]
    impl ProfileWriter for Api {
        async fn update_profile(&self, updates: &UpdateProfile) -> FetchResult<()>;
    }
}
