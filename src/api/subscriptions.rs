//! Subscriptions endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use crate::api::client::ApiClient;
use crate::api::{SubscriptionReader, SubscriptionWriter};
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::domain::types::SubscriptionId;
use crate::listview::{FetchResult, PageResult, RequestDescriptor};
use crate::models::envelope::ListEnvelope;

#[async_trait]
impl SubscriptionReader for ApiClient {
    async fn list_subscriptions(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Subscription>> {
        let envelope: ListEnvelope<Subscription> =
            self.get_list("/admin/subscriptions", descriptor).await?;
        Ok(envelope.into_page(descriptor.page(), descriptor.limit()))
    }

    async fn subscription_stats(&self) -> FetchResult<Value> {
        self.get_json("/admin/subscriptions/stats").await
    }
}

#[async_trait]
impl SubscriptionWriter for ApiClient {
    async fn set_subscription_status(
        &self,
        id: &SubscriptionId,
        status: SubscriptionStatus,
    ) -> FetchResult<()> {
        self.send_json(
            Method::PUT,
            &format!("/admin/subscriptions/{id}/status"),
            &json!({ "status": status }),
        )
        .await
    }
}
