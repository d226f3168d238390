use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{TransactionId, UserId};

/// Abbreviated user embedded in transaction and subscription rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl UserRef {
    /// Best available label for the user, falling back to the raw id.
    pub fn label(&self) -> String {
        if let Some(name) = &self.display_name {
            return name.clone();
        }
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();
        if !full.is_empty() {
            return full;
        }
        self.email
            .clone()
            .unwrap_or_else(|| self.id.as_str().to_string())
    }
}

/// Ledger entry reported by the transactions endpoint.
///
/// Type and status vocabularies are open-ended on the wire, so they stay
/// strings here; the closed vocabularies live on the filter side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: TransactionId,
    #[serde(default, alias = "user_id")]
    pub user: Option<UserRef>,
    #[serde(default, rename = "type", alias = "transactionType")]
    pub kind: Option<String>,
    pub status: String,
    pub amount: f64,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default, alias = "from_currency")]
    pub currency: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Headline counters shown above the transactions table.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    #[serde(default)]
    pub total_transactions: u64,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub total_fees: f64,
}
