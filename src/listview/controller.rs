//! Token-ordered fetch sequencing for list views.

use crate::listview::errors::{FetchError, FetchResult};
use crate::listview::query::{QueryState, RequestDescriptor};
use crate::listview::{PageResult, ViewState};

/// Monotonic identifier minted per dispatched fetch.
///
/// Token order, not completion order, decides which outcome a view keeps.
/// Tokens never leave the controller except inside a [`PendingFetch`] and
/// cannot be constructed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// A dispatched fetch waiting to be resolved and applied back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    token: RequestToken,
    descriptor: RequestDescriptor,
}

impl PendingFetch {
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }
}

/// Owns one view's [`QueryState`] and [`ViewState`] and sequences its
/// fetches.
///
/// Every mutating operation performs exactly one dispatch: it mints a fresh
/// token, records it as the latest outstanding one, moves the view to
/// `Loading` and hands back a [`PendingFetch`] for the caller to resolve.
/// [`apply`](Self::apply) then discards any outcome whose token is no longer
/// the latest, so the view always converges to the most recent query state
/// regardless of the order in which resolutions arrive.
///
/// One controller instance per list view; constructed and dropped with the
/// view itself.
#[derive(Debug)]
pub struct ListViewController<T> {
    query: QueryState,
    view: ViewState<T>,
    last_token: u64,
    outstanding: Option<RequestToken>,
}

impl<T> Default for ListViewController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListViewController<T> {
    pub fn new() -> Self {
        Self::with_query(QueryState::new())
    }

    pub fn with_query(query: QueryState) -> Self {
        Self {
            query,
            view: ViewState::Idle,
            last_token: 0,
            outstanding: None,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Read-only snapshot of what the view currently shows.
    pub fn view(&self) -> &ViewState<T> {
        &self.view
    }

    /// Updates a filter (removing the key on `None` or a blank value),
    /// resets the page to 1 and dispatches.
    pub fn set_filter(&mut self, key: &str, value: Option<&str>) -> PendingFetch {
        self.query.set_filter(key, value);
        self.dispatch()
    }

    /// Updates the search term, resets the page to 1 and dispatches.
    ///
    /// Debouncing rapid keystrokes is the caller's concern; each call here
    /// dispatches.
    pub fn set_search(&mut self, text: &str) -> PendingFetch {
        self.query.set_search(text);
        self.dispatch()
    }

    /// Moves to the given page, guarding `1 <= page <= max(page_count, 1)`
    /// against the currently loaded result.
    ///
    /// The guard is local: an out-of-range page fails with
    /// [`FetchError::InvalidPage`] without dispatching or touching the view.
    pub fn set_page(&mut self, page: usize) -> FetchResult<PendingFetch> {
        let limit = match &self.view {
            ViewState::Loaded(result) => result.page_count().max(1),
            _ => 1,
        };
        if page == 0 || page > limit {
            return Err(FetchError::InvalidPage(page));
        }
        self.query.set_page(page);
        Ok(self.dispatch())
    }

    /// Changes the page size, resets the page to 1 and dispatches.
    pub fn set_page_size(&mut self, size: usize) -> PendingFetch {
        self.query.set_page_size(size);
        self.dispatch()
    }

    /// Re-dispatches the current query state unchanged. Called after a
    /// successful mutation so the list reflects it, and as the manual retry
    /// path after a failure.
    pub fn refresh(&mut self) -> PendingFetch {
        self.dispatch()
    }

    fn dispatch(&mut self) -> PendingFetch {
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.outstanding = Some(token);
        self.view = ViewState::Loading(token);
        PendingFetch {
            token,
            descriptor: self.query.descriptor(),
        }
    }

    /// Applies a resolved outcome.
    ///
    /// Returns `false` and changes nothing when a newer dispatch has
    /// superseded the fetch: the stale outcome is discarded unconditionally,
    /// success and failure alike. Only the latest outstanding fetch
    /// transitions the view to `Loaded` or `Failed`.
    pub fn apply(&mut self, fetch: &PendingFetch, outcome: FetchResult<PageResult<T>>) -> bool {
        if self.outstanding != Some(fetch.token) {
            return false;
        }
        self.outstanding = None;
        self.view = match outcome {
            Ok(result) => ViewState::Loaded(result),
            Err(err) => ViewState::Failed(err),
        };
        true
    }
}
