use crate::domain::user::{User, UserStats};
use crate::listview::PageResult;

/// Data required to render the users screen.
#[derive(Debug, Clone)]
pub struct UsersPageData {
    /// Headline counters above the table.
    pub stats: UserStats,
    /// Current page of the users list.
    pub users: PageResult<User>,
}
