//! Wire envelopes the backend wraps responses in.
//!
//! List endpoints speak two pagination conventions, and a few endpoints wrap
//! single payloads in `{ data }` only sometimes. Normalization into the
//! canonical [`PageResult`] happens here, once, so nothing downstream ever
//! branches on envelope shape.

use serde::Deserialize;

use crate::listview::PageResult;

/// Pagination block inside the structured envelope.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub pages: usize,
}

/// The two list-envelope conventions the backend speaks.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `{ "data": [...], "pagination": { total, page, limit, pages } }`,
    /// with `"users"` as an alternate row key on older endpoints.
    Structured {
        #[serde(alias = "users")]
        data: Vec<T>,
        pagination: PaginationMeta,
    },
    /// `{ "users": [...], "totalPages": n, "total"?: n }`.
    Legacy {
        #[serde(alias = "data")]
        users: Vec<T>,
        #[serde(rename = "totalPages")]
        total_pages: usize,
        #[serde(default)]
        total: Option<usize>,
    },
}

impl<T> ListEnvelope<T> {
    /// Normalizes either convention into the canonical page result.
    ///
    /// `page` and `page_size` are what the request asked for; the structured
    /// envelope's own pagination block wins when it is populated. A legacy
    /// envelope without `total` gets it reconstructed from `totalPages`:
    /// exact on the last page, `pages * limit` as the best bound before it.
    pub fn into_page(self, page: usize, page_size: usize) -> PageResult<T> {
        match self {
            ListEnvelope::Structured { data, pagination } => {
                let page = if pagination.page > 0 {
                    pagination.page
                } else {
                    page
                };
                let limit = if pagination.limit > 0 {
                    pagination.limit
                } else {
                    page_size
                };
                PageResult::new(data, pagination.total, page, limit)
            }
            ListEnvelope::Legacy {
                users,
                total_pages,
                total,
            } => {
                let limit = page_size.max(1);
                let total = total.unwrap_or(match total_pages {
                    0 => 0,
                    pages if page >= pages => (pages - 1) * limit + users.len(),
                    pages => pages * limit,
                });
                PageResult::new(users, total, page, limit)
            }
        }
    }
}

/// Non-paginated `{ success, data }` wrapper used by the sales-team
/// endpoints.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: T,
}

/// Payloads that arrive sometimes wrapped in `{ data }` and sometimes bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MaybeEnvelope<T> {
    Wrapped(DataEnvelope<T>),
    Bare(T),
}

impl<T> MaybeEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            MaybeEnvelope::Wrapped(envelope) => envelope.data,
            MaybeEnvelope::Bare(value) => value,
        }
    }
}
