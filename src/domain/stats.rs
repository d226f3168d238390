use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Platform-wide counters behind the dashboard landing screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub new_users_this_month: u64,
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub monthly_revenue: f64,
    #[serde(default)]
    pub kyc_pending: u64,
    #[serde(default)]
    pub kyb_pending: u64,
    #[serde(default)]
    pub suspended_users: u64,
    #[serde(default)]
    pub past_due_subscriptions: u64,
    #[serde(default)]
    pub active_subscriptions: u64,
    /// Free-form rows the dashboard renders verbatim.
    #[serde(default)]
    pub recent_transactions: Vec<Value>,
    #[serde(default)]
    pub top_users: Vec<Value>,
}
