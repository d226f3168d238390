//! User-controlled query state and its projection into a request descriptor.

use std::collections::BTreeMap;

use serde::Serialize;

/// Rows requested per page when a view does not say otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page sizes the views offer.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

/// The user-controlled input to a list view: current page, page size, active
/// filters and free-text search.
///
/// A blank filter value and an absent key mean the same thing ("no
/// constraint"), so blanks are dropped on entry and never reach the backend.
/// Changing filters, search or page size resets the page back to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: usize,
    page_size: usize,
    filters: BTreeMap<String, String>,
    search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_ITEMS_PER_PAGE,
            filters: BTreeMap::new(),
            search: String::new(),
        }
    }

    /// Adds a filter constraint. Blank values are ignored.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_filter(key.into(), Some(value.into()));
        self
    }

    /// Sets the free-text search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into().trim().to_string();
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        if per_page > 0 {
            self.page_size = per_page;
        }
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub(crate) fn set_filter(&mut self, key: &str, value: Option<&str>) {
        self.put_filter(key.to_string(), value.map(str::to_string));
        self.page = 1;
    }

    pub(crate) fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
        self.page = 1;
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub(crate) fn set_page_size(&mut self, size: usize) {
        if size > 0 {
            self.page_size = size;
        }
        self.page = 1;
    }

    fn put_filter(&mut self, key: String, value: Option<String>) {
        let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        match value {
            Some(value) => {
                self.filters.insert(key, value);
            }
            None => {
                self.filters.remove(&key);
            }
        }
    }

    /// Projects the state into an ordered, backend-addressable descriptor.
    ///
    /// The projection is deterministic: equal states yield identical
    /// descriptors, pair for pair.
    pub fn descriptor(&self) -> RequestDescriptor {
        let mut pairs = Vec::with_capacity(3 + self.filters.len());
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.page_size.to_string()));
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        RequestDescriptor { pairs }
    }
}

/// A deterministic, serializable projection of a [`QueryState`]: ordered
/// key/value pairs ready for a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestDescriptor {
    pairs: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// The 1-based page this descriptor asks for.
    pub fn page(&self) -> usize {
        self.numeric("page").unwrap_or(1)
    }

    /// The page size this descriptor asks for.
    pub fn limit(&self) -> usize {
        self.numeric("limit").unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    fn numeric(&self, key: &str) -> Option<usize> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.parse().ok())
    }

    /// Renders the descriptor as a percent-encoded query string.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(&self.pairs).unwrap_or_default()
    }
}
