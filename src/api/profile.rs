//! Admin profile endpoints backing the settings screen.

use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::{ProfileReader, ProfileWriter};
use crate::domain::profile::{AdminProfile, UpdateProfile};
use crate::listview::FetchResult;
use crate::models::envelope::MaybeEnvelope;

#[async_trait]
impl ProfileReader for ApiClient {
    async fn profile(&self) -> FetchResult<AdminProfile> {
        let envelope: MaybeEnvelope<AdminProfile> = self.get_json("/auth/profile").await?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl ProfileWriter for ApiClient {
    async fn update_profile(&self, updates: &UpdateProfile) -> FetchResult<()> {
        self.send_json(Method::PUT, "/auth/profile", updates).await
    }
}
