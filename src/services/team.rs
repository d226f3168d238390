use crate::api::{TeamReader, TeamWriter};
use crate::domain::team::{NewTeamMember, SalesDashboard, TeamMember, UpdateTeamMember};
use crate::domain::types::TeamMemberId;
use crate::dto::team::TeamPageData;
use crate::services::{ServiceError, ServiceResult};

/// Loads the sales-team screen. The team list is not paginated; rows come
/// back whole.
pub async fn load_team_page<A>(api: &A) -> ServiceResult<TeamPageData>
where
    A: TeamReader + ?Sized,
{
    let members = api.list_team().await.map_err(|err| {
        log::error!("Failed to list sales team: {err}");
        ServiceError::from(err)
    })?;

    Ok(TeamPageData { members })
}

/// Loads the referral/sales dashboard payload.
pub async fn load_sales_dashboard<A>(api: &A) -> ServiceResult<SalesDashboard>
where
    A: TeamReader + ?Sized,
{
    api.sales_dashboard().await.map_err(|err| {
        log::error!("Failed to load sales dashboard: {err}");
        ServiceError::from(err)
    })
}

/// Onboards a member and returns the refreshed roster.
pub async fn add_team_member<A>(api: &A, member: &NewTeamMember) -> ServiceResult<Vec<TeamMember>>
where
    A: TeamReader + TeamWriter + ?Sized,
{
    api.create_team_member(member).await.map_err(|err| {
        log::error!("Failed to add team member: {err}");
        ServiceError::from(err)
    })?;

    api.list_team().await.map_err(ServiceError::from)
}

/// Edits a member and returns the refreshed roster.
pub async fn update_team_member<A>(
    api: &A,
    member_id: &TeamMemberId,
    updates: &UpdateTeamMember,
) -> ServiceResult<Vec<TeamMember>>
where
    A: TeamReader + TeamWriter + ?Sized,
{
    api.update_team_member(member_id, updates)
        .await
        .map_err(|err| {
            log::error!("Failed to update team member {member_id}: {err}");
            ServiceError::from(err)
        })?;

    api.list_team().await.map_err(ServiceError::from)
}

/// Removes a member and returns the refreshed roster.
pub async fn remove_team_member<A>(
    api: &A,
    member_id: &TeamMemberId,
) -> ServiceResult<Vec<TeamMember>>
where
    A: TeamReader + TeamWriter + ?Sized,
{
    api.delete_team_member(member_id).await.map_err(|err| {
        log::error!("Failed to remove team member {member_id}: {err}");
        ServiceError::from(err)
    })?;

    api.list_team().await.map_err(ServiceError::from)
}
