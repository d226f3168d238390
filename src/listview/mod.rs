//! Server-driven list views.
//!
//! Every list screen in the dashboard is the same machine: a page of rows
//! fetched from a backend endpoint, steered by filters, free-text search and
//! pagination. This module is that machine, once: [`QueryState`] holds the
//! user-controlled input, [`ListViewController`] turns each change into
//! exactly one dispatched fetch and reconciles outcomes in token order, and
//! [`ListView`] pairs a controller with an injected [`ListResolver`] for
//! callers with linear control flow.

pub mod controller;
pub mod errors;
pub mod query;
#[cfg(feature = "http")]
pub mod view;

use serde::Serialize;

pub use controller::{ListViewController, PendingFetch, RequestToken};
pub use errors::{FetchError, FetchResult};
pub use query::{DEFAULT_ITEMS_PER_PAGE, PAGE_SIZE_OPTIONS, QueryState, RequestDescriptor};
#[cfg(feature = "http")]
pub use view::{ListResolver, ListView};

/// One resolved page of rows plus the pagination facts about the whole
/// result set.
///
/// `page_count` is normalized at construction: 0 when the result set is
/// empty, else `ceil(total / page_size)`, whatever convention the backend
/// envelope used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    rows: Vec<T>,
    total: usize,
    page: usize,
    page_size: usize,
    page_count: usize,
}

impl<T> PageResult<T> {
    pub fn new(rows: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = if total == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        Self {
            rows,
            total,
            page: page.max(1),
            page_size,
            page_count,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What a list view currently shows. Exactly one variant is active at a
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing fetched yet.
    Idle,
    /// A fetch for the tagged token is in flight.
    Loading(RequestToken),
    /// The latest fetch resolved into a page.
    Loaded(PageResult<T>),
    /// The latest fetch failed.
    Failed(FetchError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading(_))
    }

    pub fn loaded(&self) -> Option<&PageResult<T>> {
        match self {
            ViewState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
