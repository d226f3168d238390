use async_trait::async_trait;

use crate::api::{SubscriptionReader, SubscriptionWriter};
use crate::domain::subscription::{Subscription, SubscriptionStatus};
use crate::domain::types::SubscriptionId;
use crate::dto::subscriptions::SubscriptionsPageData;
use crate::listview::{FetchResult, ListResolver, ListView, PageResult, RequestDescriptor};
use crate::services::{ServiceError, ServiceResult};

/// Resolver feeding the subscriptions list view.
pub struct SubscriptionListSource<A> {
    api: A,
}

impl<A> SubscriptionListSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> ListResolver<Subscription> for SubscriptionListSource<A>
where
    A: SubscriptionReader,
{
    async fn resolve(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Subscription>> {
        self.api.list_subscriptions(descriptor).await
    }
}

/// Builds the subscriptions list view bound to the given gateway.
pub fn subscriptions_view<A>(api: A) -> ListView<Subscription, SubscriptionListSource<A>>
where
    A: SubscriptionReader,
{
    ListView::new(SubscriptionListSource::new(api))
}

/// Loads the subscriptions screen: stats plus the current page of the list.
pub async fn load_subscriptions_page<A, R>(
    api: &A,
    view: &mut ListView<Subscription, R>,
) -> ServiceResult<SubscriptionsPageData>
where
    A: SubscriptionReader + ?Sized,
    R: ListResolver<Subscription>,
{
    let stats = api.subscription_stats().await.map_err(|err| {
        log::error!("Failed to load subscription stats: {err}");
        ServiceError::from(err)
    })?;

    let page_size = view.query().page_size();
    let state = view.refresh().await;
    if let Some(err) = state.error() {
        log::error!("Failed to list subscriptions: {err}");
        return Err(ServiceError::Fetch(err.clone()));
    }
    let subscriptions = state
        .loaded()
        .cloned()
        .unwrap_or_else(|| PageResult::new(Vec::new(), 0, 1, page_size));

    Ok(SubscriptionsPageData {
        stats,
        subscriptions,
    })
}

/// Changes a subscription's standing, then refreshes the list.
pub async fn set_subscription_status<A, R>(
    api: &A,
    view: &mut ListView<Subscription, R>,
    subscription_id: &SubscriptionId,
    status: SubscriptionStatus,
) -> ServiceResult<()>
where
    A: SubscriptionWriter + ?Sized,
    R: ListResolver<Subscription>,
{
    api.set_subscription_status(subscription_id, status)
        .await
        .map_err(|err| {
            log::error!("Failed to update status for subscription {subscription_id}: {err}");
            ServiceError::from(err)
        })?;

    view.refresh().await;
    Ok(())
}
