use async_trait::async_trait;

use crate::api::TransactionReader;
use crate::domain::transaction::Transaction;
use crate::dto::transactions::TransactionsPageData;
use crate::listview::{FetchResult, ListResolver, ListView, PageResult, RequestDescriptor};
use crate::services::{ServiceError, ServiceResult};

/// Resolver feeding the transactions list view.
pub struct TransactionListSource<A> {
    api: A,
}

impl<A> TransactionListSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> ListResolver<Transaction> for TransactionListSource<A>
where
    A: TransactionReader,
{
    async fn resolve(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Transaction>> {
        self.api.list_transactions(descriptor).await
    }
}

/// Builds the transactions list view bound to the given gateway.
pub fn transactions_view<A>(api: A) -> ListView<Transaction, TransactionListSource<A>>
where
    A: TransactionReader,
{
    ListView::new(TransactionListSource::new(api))
}

/// Loads the transactions screen: headline stats plus the current page of
/// the ledger.
pub async fn load_transactions_page<A, R>(
    api: &A,
    view: &mut ListView<Transaction, R>,
) -> ServiceResult<TransactionsPageData>
where
    A: TransactionReader + ?Sized,
    R: ListResolver<Transaction>,
{
    let stats = api.transaction_stats().await.map_err(|err| {
        log::error!("Failed to load transaction stats: {err}");
        ServiceError::from(err)
    })?;

    let page_size = view.query().page_size();
    let state = view.refresh().await;
    if let Some(err) = state.error() {
        log::error!("Failed to list transactions: {err}");
        return Err(ServiceError::Fetch(err.clone()));
    }
    let transactions = state
        .loaded()
        .cloned()
        .unwrap_or_else(|| PageResult::new(Vec::new(), 0, 1, page_size));

    Ok(TransactionsPageData {
        stats,
        transactions,
    })
}
