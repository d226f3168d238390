use crate::domain::transaction::{Transaction, TransactionStats};
use crate::listview::PageResult;

/// Data required to render the transactions screen.
#[derive(Debug, Clone)]
pub struct TransactionsPageData {
    pub stats: TransactionStats,
    /// Current page of the ledger.
    pub transactions: PageResult<Transaction>,
}
