//! Async facade pairing a controller with its injected resolver.

use async_trait::async_trait;

use crate::listview::controller::{ListViewController, PendingFetch};
use crate::listview::errors::FetchResult;
use crate::listview::query::{QueryState, RequestDescriptor};
use crate::listview::{PageResult, ViewState};

/// Resolves a request descriptor into one page of rows.
///
/// In production this is an HTTP call against a backend list endpoint; in
/// tests anything that answers descriptors will do.
#[async_trait]
pub trait ListResolver<T>: Send + Sync {
    async fn resolve(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<T>>;
}

/// A list view driving its [`ListViewController`] through an injected
/// resolver.
///
/// Each operation runs one full dispatch → resolve → apply cycle before
/// returning, which suits linear callers (services, binaries, tests). A UI
/// event loop with overlapping input should drive the controller directly
/// and apply completions as they arrive; the token comparison inside
/// `apply` keeps that safe in any completion order.
pub struct ListView<T, R> {
    controller: ListViewController<T>,
    resolver: R,
}

impl<T, R> ListView<T, R>
where
    T: Send,
    R: ListResolver<T>,
{
    pub fn new(resolver: R) -> Self {
        Self::with_query(QueryState::new(), resolver)
    }

    pub fn with_query(query: QueryState, resolver: R) -> Self {
        Self {
            controller: ListViewController::with_query(query),
            resolver,
        }
    }

    pub fn query(&self) -> &QueryState {
        self.controller.query()
    }

    pub fn view(&self) -> &ViewState<T> {
        self.controller.view()
    }

    /// Fetches the current query state; used both for the initial load and
    /// for refreshes after mutations.
    pub async fn refresh(&mut self) -> &ViewState<T> {
        let fetch = self.controller.refresh();
        self.run(fetch).await
    }

    pub async fn set_filter(&mut self, key: &str, value: Option<&str>) -> &ViewState<T> {
        let fetch = self.controller.set_filter(key, value);
        self.run(fetch).await
    }

    pub async fn set_search(&mut self, text: &str) -> &ViewState<T> {
        let fetch = self.controller.set_search(text);
        self.run(fetch).await
    }

    pub async fn set_page(&mut self, page: usize) -> FetchResult<&ViewState<T>> {
        let fetch = self.controller.set_page(page)?;
        Ok(self.run(fetch).await)
    }

    pub async fn set_page_size(&mut self, size: usize) -> &ViewState<T> {
        let fetch = self.controller.set_page_size(size);
        self.run(fetch).await
    }

    async fn run(&mut self, fetch: PendingFetch) -> &ViewState<T> {
        let outcome = self.resolver.resolve(fetch.descriptor()).await;
        self.controller.apply(&fetch, outcome);
        self.controller.view()
    }
}
