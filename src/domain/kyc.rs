use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{KycRecordId, UserId};

/// Review outcome of an identity submission.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
    UnderReview,
}

impl KycStatus {
    /// Whether an approve/reject decision is still possible.
    pub fn is_open(&self) -> bool {
        matches!(self, KycStatus::Pending | KycStatus::UnderReview)
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KycStatus::Pending => write!(f, "pending"),
            KycStatus::Approved => write!(f, "approved"),
            KycStatus::Rejected => write!(f, "rejected"),
            KycStatus::UnderReview => write!(f, "under_review"),
        }
    }
}

/// Which verification track a record belongs to: persons (KYC) or
/// businesses (KYB).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerificationTrack {
    Kyc,
    Kyb,
}

impl VerificationTrack {
    /// Path segment the backend uses for this track.
    pub fn as_path(&self) -> &'static str {
        match self {
            VerificationTrack::Kyc => "kyc",
            VerificationTrack::Kyb => "kyb",
        }
    }
}

/// Identity submission under review.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    #[serde(rename = "_id")]
    pub id: KycRecordId,
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub status: KycStatus,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub identification_type: Option<String>,
    #[serde(default)]
    pub personal_identification_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub passport_image: Option<String>,
    #[serde(default)]
    pub national_id_image: Option<String>,
    #[serde(default)]
    pub passport_selfie: Option<String>,
    #[serde(default)]
    pub current_step: Option<u32>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Headline counters for the combined KYC/KYB screen.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycKybStats {
    #[serde(default)]
    pub kyc_pending: u64,
    #[serde(default)]
    pub kyc_approved: u64,
    #[serde(default)]
    pub kyc_rejected: u64,
    #[serde(default)]
    pub kyb_pending: u64,
    #[serde(default)]
    pub kyb_approved: u64,
    #[serde(default)]
    pub kyb_rejected: u64,
}
