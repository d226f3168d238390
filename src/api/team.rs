//! Sales-team endpoints.
//!
//! The team list is the one screen the backend does not paginate; rows come
//! back whole inside the `{ success, data }` wrapper.

use async_trait::async_trait;
use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::{TeamReader, TeamWriter};
use crate::domain::team::{NewTeamMember, SalesDashboard, TeamMember, UpdateTeamMember};
use crate::domain::types::TeamMemberId;
use crate::listview::FetchResult;
use crate::models::envelope::{DataEnvelope, MaybeEnvelope};

#[async_trait]
impl TeamReader for ApiClient {
    async fn list_team(&self) -> FetchResult<Vec<TeamMember>> {
        let envelope: DataEnvelope<Vec<TeamMember>> = self.get_json("/admin/sales-team").await?;
        Ok(envelope.data)
    }

    async fn sales_dashboard(&self) -> FetchResult<SalesDashboard> {
        let envelope: MaybeEnvelope<SalesDashboard> =
            self.get_json("/admin/sales-team/dashboard").await?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl TeamWriter for ApiClient {
    async fn create_team_member(&self, member: &NewTeamMember) -> FetchResult<()> {
        self.send_json(Method::POST, "/admin/sales-team", member)
            .await
    }

    async fn update_team_member(
        &self,
        id: &TeamMemberId,
        updates: &UpdateTeamMember,
    ) -> FetchResult<()> {
        self.send_json(Method::PUT, &format!("/admin/sales-team/{id}"), updates)
            .await
    }

    async fn delete_team_member(&self, id: &TeamMemberId) -> FetchResult<()> {
        self.send_empty(Method::DELETE, &format!("/admin/sales-team/{id}"))
            .await
    }
}
