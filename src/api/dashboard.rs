//! Dashboard landing-screen endpoints.

use async_trait::async_trait;

use crate::api::DashboardReader;
use crate::api::client::ApiClient;
use crate::domain::stats::DashboardStats;
use crate::listview::FetchResult;

#[async_trait]
impl DashboardReader for ApiClient {
    async fn dashboard_stats(&self) -> FetchResult<DashboardStats> {
        self.get_json("/admin/dashboard/stats").await
    }
}
