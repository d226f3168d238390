//! Screen-level services: page loads and mutations, generic over the
//! gateway traits.
//!
//! Every mutation follows the same contract: call the backend, and only on
//! success refresh the live list view so the screen reflects the change.
//! Failures leave the list untouched and surface to the caller.

pub mod kyc;
pub mod settings;
pub mod subscriptions;
pub mod team;
pub mod transactions;
pub mod users;

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::listview::FetchError;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("validation error: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
