//! Users endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::{UserReader, UserWriter};
use crate::domain::types::UserId;
use crate::domain::user::{User, UserStats, UserStatus};
use crate::listview::{FetchResult, PageResult, RequestDescriptor};
use crate::models::envelope::ListEnvelope;

#[async_trait]
impl UserReader for ApiClient {
    async fn list_users(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>> {
        let envelope: ListEnvelope<User> = self.get_list("/admin/users", descriptor).await?;
        Ok(envelope.into_page(descriptor.page(), descriptor.limit()))
    }

    async fn user_stats(&self) -> FetchResult<UserStats> {
        self.get_json("/admin/users/stats").await
    }
}

#[async_trait]
impl UserWriter for ApiClient {
    async fn delete_user(&self, id: &UserId) -> FetchResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/users/{id}"))
            .await
    }

    async fn set_user_status(&self, id: &UserId, status: UserStatus) -> FetchResult<()> {
        self.send_json(
            Method::PUT,
            &format!("/admin/users/{id}/status"),
            &json!({ "status": status }),
        )
        .await
    }
}
