use crate::api::{ProfileReader, ProfileWriter};
use crate::domain::profile::{AdminProfile, UpdateProfile};
use crate::services::{ServiceError, ServiceResult};

/// Loads the signed-in administrator's profile for the settings screen.
pub async fn load_profile<A>(api: &A) -> ServiceResult<AdminProfile>
where
    A: ProfileReader + ?Sized,
{
    api.profile().await.map_err(|err| {
        log::error!("Failed to load profile: {err}");
        ServiceError::from(err)
    })
}

/// Persists profile changes (and a password change when attached).
pub async fn save_profile<A>(api: &A, updates: &UpdateProfile) -> ServiceResult<()>
where
    A: ProfileWriter + ?Sized,
{
    api.update_profile(updates).await.map_err(|err| {
        log::error!("Failed to save profile: {err}");
        ServiceError::from(err)
    })
}
