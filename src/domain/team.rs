use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, TeamMemberId, TypeConstraintError};

/// Sales-team member with referral performance counters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: TeamMemberId,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub status: TeamMemberStatus,
    #[serde(default)]
    pub onboarded_users: u64,
    #[serde(default)]
    pub total_subscriptions: u64,
    #[serde(default)]
    pub monthly_new_subscriptions: u64,
    #[serde(default)]
    pub last_month_new_subscriptions: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamMemberStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for TeamMemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamMemberStatus::Active => write!(f, "active"),
            TeamMemberStatus::Inactive => write!(f, "inactive"),
        }
    }
}

/// Payload for onboarding a sales-team member.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewTeamMember {
    pub name: String,
    pub email: EmailAddress,
    pub password: String,
}

impl NewTeamMember {
    /// Validates the member fields before they go on the wire.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let password = password.into();
        if password.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            name,
            email: EmailAddress::new(email)?,
            password,
        })
    }
}

/// Payload for editing a sales-team member; a `None` password keeps the
/// current one.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct UpdateTeamMember {
    pub name: String,
    pub email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UpdateTeamMember {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            name,
            email: EmailAddress::new(email)?,
            password: password.filter(|p| !p.is_empty()),
        })
    }
}

/// Downline row inside the sales dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Downline {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub onboarded_users: u64,
    #[serde(default)]
    pub total_subscriptions: u64,
    #[serde(default)]
    pub status: Option<TeamMemberStatus>,
}

/// Referral performance payload behind the sales dashboard and referral
/// screens.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesDashboard {
    #[serde(default)]
    pub onboarded_users: u64,
    #[serde(default)]
    pub total_subscriptions: u64,
    #[serde(default)]
    pub monthly_new_subscriptions: u64,
    #[serde(default)]
    pub last_month_new_subscriptions: u64,
    #[serde(default)]
    pub referral_code: String,
    #[serde(default)]
    pub downlines: Vec<Downline>,
}
