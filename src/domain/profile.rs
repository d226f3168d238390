use serde::{Deserialize, Serialize};

use crate::domain::types::{EmailAddress, TypeConstraintError};

/// Profile of the signed-in administrator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Profile update payload; the password pair is only sent when the admin is
/// actually changing it.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub name: String,
    pub email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UpdateProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            name,
            email: EmailAddress::new(email)?,
            current_password: None,
            new_password: None,
        })
    }

    /// Attaches a password change. Both halves are required together.
    pub fn change_password(
        mut self,
        current: impl Into<String>,
        new: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        let current = current.into();
        let new = new.into();
        if current.is_empty() || new.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        self.current_password = Some(current);
        self.new_password = Some(new);
        Ok(self)
    }
}
