use serde_json::Value;

use crate::domain::subscription::Subscription;
use crate::listview::PageResult;

/// Data required to render the subscriptions screen.
///
/// Stats stay free-form: the backend has no stable shape for them yet and
/// the screen renders whatever counters arrive.
#[derive(Debug, Clone)]
pub struct SubscriptionsPageData {
    pub stats: Value,
    pub subscriptions: PageResult<Subscription>,
}
