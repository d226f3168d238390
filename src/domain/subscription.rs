use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::UserRef;
use crate::domain::types::SubscriptionId;

/// Billing subscription as the admin backend reports it.
///
/// The subscriptions endpoint predates the camelCase convention: most of its
/// fields arrive snake_case, with `createdAt` the lone exception.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: SubscriptionId,
    #[serde(default, rename = "user_id", alias = "user")]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub plan_display_name: Option<String>,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub billing_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub billing_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_billing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_billing_amount: Option<f64>,
    #[serde(default)]
    pub monthly_fee_usd: Option<f64>,
    #[serde(default)]
    pub deposit_lock_vyo: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Subscription standing.
///
/// The subscriptions endpoint speaks SCREAMING_SNAKE_CASE; user rows embed
/// the same states lowercased (plus `inactive`), hence the aliases.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "inactive")]
    Inactive,
    #[serde(alias = "past_due")]
    PastDue,
    #[serde(alias = "suspended")]
    Suspended,
    #[serde(alias = "canceled")]
    Canceled,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "ACTIVE"),
            SubscriptionStatus::Inactive => write!(f, "INACTIVE"),
            SubscriptionStatus::PastDue => write!(f, "PAST_DUE"),
            SubscriptionStatus::Suspended => write!(f, "SUSPENDED"),
            SubscriptionStatus::Canceled => write!(f, "CANCELED"),
        }
    }
}
