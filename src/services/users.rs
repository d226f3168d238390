use async_trait::async_trait;

use crate::api::{UserReader, UserWriter};
use crate::domain::types::UserId;
use crate::domain::user::{User, UserStatus};
use crate::dto::users::UsersPageData;
use crate::listview::{FetchResult, ListResolver, ListView, PageResult, RequestDescriptor};
use crate::services::{ServiceError, ServiceResult};

/// Resolver feeding the users list view.
pub struct UserListSource<A> {
    api: A,
}

impl<A> UserListSource<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> ListResolver<User> for UserListSource<A>
where
    A: UserReader,
{
    async fn resolve(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>> {
        self.api.list_users(descriptor).await
    }
}

/// Builds the users list view bound to the given gateway.
pub fn users_view<A>(api: A) -> ListView<User, UserListSource<A>>
where
    A: UserReader,
{
    ListView::new(UserListSource::new(api))
}

/// Loads the users screen: headline stats plus the current page of the
/// list.
pub async fn load_users_page<A, R>(
    api: &A,
    view: &mut ListView<User, R>,
) -> ServiceResult<UsersPageData>
where
    A: UserReader + ?Sized,
    R: ListResolver<User>,
{
    let stats = api.user_stats().await.map_err(|err| {
        log::error!("Failed to load user stats: {err}");
        ServiceError::from(err)
    })?;

    let page_size = view.query().page_size();
    let state = view.refresh().await;
    if let Some(err) = state.error() {
        log::error!("Failed to list users: {err}");
        return Err(ServiceError::Fetch(err.clone()));
    }
    let users = state
        .loaded()
        .cloned()
        .unwrap_or_else(|| PageResult::new(Vec::new(), 0, 1, page_size));

    Ok(UsersPageData { stats, users })
}

/// Deletes a user, then refreshes the list so it reflects the removal.
pub async fn delete_user<A, R>(
    api: &A,
    view: &mut ListView<User, R>,
    user_id: &UserId,
) -> ServiceResult<()>
where
    A: UserWriter + ?Sized,
    R: ListResolver<User>,
{
    api.delete_user(user_id).await.map_err(|err| {
        log::error!("Failed to delete user {user_id}: {err}");
        ServiceError::from(err)
    })?;

    view.refresh().await;
    Ok(())
}

/// Changes a user's standing, then refreshes the list.
pub async fn set_user_status<A, R>(
    api: &A,
    view: &mut ListView<User, R>,
    user_id: &UserId,
    status: UserStatus,
) -> ServiceResult<()>
where
    A: UserWriter + ?Sized,
    R: ListResolver<User>,
{
    api.set_user_status(user_id, status).await.map_err(|err| {
        log::error!("Failed to update status for user {user_id}: {err}");
        ServiceError::from(err)
    })?;

    view.refresh().await;
    Ok(())
}
