//! Transactions endpoints.

use async_trait::async_trait;

use crate::api::TransactionReader;
use crate::api::client::ApiClient;
use crate::domain::transaction::{Transaction, TransactionStats};
use crate::listview::{FetchResult, PageResult, RequestDescriptor};
use crate::models::envelope::ListEnvelope;

#[async_trait]
impl TransactionReader for ApiClient {
    async fn list_transactions(
        &self,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<Transaction>> {
        let envelope: ListEnvelope<Transaction> =
            self.get_list("/admin/transactions", descriptor).await?;
        Ok(envelope.into_page(descriptor.page(), descriptor.limit()))
    }

    async fn transaction_stats(&self) -> FetchResult<TransactionStats> {
        self.get_json("/admin/transactions/stats").await
    }
}
