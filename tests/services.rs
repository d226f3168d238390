use std::sync::{Arc, Mutex};

use chrono::Utc;
use mockall::mock;
use mockall::predicate::eq;

use valygo_admin::api::{
    ProfileReader, ProfileWriter, TeamReader, TeamWriter, UserReader, UserWriter,
    VerificationReader, VerificationWriter,
};
use valygo_admin::domain::kyc::{KycKybStats, KycRecord, KycStatus, VerificationTrack};
use valygo_admin::domain::profile::{AdminProfile, UpdateProfile};
use valygo_admin::domain::team::{NewTeamMember, TeamMember, TeamMemberStatus};
use valygo_admin::domain::types::{KycRecordId, TeamMemberId, UserId};
use valygo_admin::domain::user::{AccountType, User, UserStats, UserStatus};
use valygo_admin::listview::{
    FetchError, FetchResult, ListResolver, ListView, PageResult, QueryState, RequestDescriptor,
};
use valygo_admin::services::{ServiceError, kyc as kyc_service, settings, team, users};

mock! {
    Api {}

    #[async_trait::async_trait]
    impl UserReader for Api {
        async fn list_users(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>>;
        async fn user_stats(&self) -> FetchResult<UserStats>;
    }

    #[async_trait::async_trait]
    impl UserWriter for Api {
        async fn delete_user(&self, id: &UserId) -> FetchResult<()>;
        async fn set_user_status(&self, id: &UserId, status: UserStatus) -> FetchResult<()>;
    }

    #[async_trait::async_trait]
    impl VerificationReader for Api {
        async fn list_verifications(
            &self,
            track: VerificationTrack,
            descriptor: &RequestDescriptor,
        ) -> FetchResult<PageResult<KycRecord>>;
        async fn verification_stats(&self) -> FetchResult<KycKybStats>;
    }

    #[async_trait::async_trait]
    impl VerificationWriter for Api {
        async fn approve_verification(
            &self,
            track: VerificationTrack,
            id: &KycRecordId,
        ) -> FetchResult<()>;
        async fn reject_verification(
            &self,
            track: VerificationTrack,
            id: &KycRecordId,
            reason: &str,
        ) -> FetchResult<()>;
    }

    #[async_trait::async_trait]
    impl TeamReader for Api {
        async fn list_team(&self) -> FetchResult<Vec<TeamMember>>;
        async fn sales_dashboard(&self) -> FetchResult<valygo_admin::domain::team::SalesDashboard>;
    }

    #[async_trait::async_trait]
    impl TeamWriter for Api {
        async fn create_team_member(&self, member: &NewTeamMember) -> FetchResult<()>;
        async fn update_team_member(
            &self,
            id: &TeamMemberId,
            updates: &valygo_admin::domain::team::UpdateTeamMember,
        ) -> FetchResult<()>;
        async fn delete_team_member(&self, id: &TeamMemberId) -> FetchResult<()>;
    }

    #[async_trait::async_trait]
    impl ProfileReader for Api {
        async fn profile(&self) -> FetchResult<AdminProfile>;
    }

    #[async_trait::async_trait]
    impl ProfileWriter for Api {
        async fn update_profile(&self, updates: &UpdateProfile) -> FetchResult<()>;
    }
}

fn sample_user(id: &str) -> User {
    User {
        id: UserId::new(id).expect("valid id"),
        first_name: "Alice".into(),
        last_name: "Doe".into(),
        email: "alice@example.com".into(),
        phone_number: None,
        country: None,
        status: UserStatus::Active,
        account_type: AccountType::Individual,
        kyc_status: KycStatus::Approved,
        subscription_status: None,
        total_transactions: 0,
        total_volume: 0.0,
        last_login: None,
        created_at: Utc::now(),
    }
}

fn member(id: &str, name: &str) -> TeamMember {
    TeamMember {
        id: TeamMemberId::new(id).expect("valid id"),
        name: name.into(),
        email: format!("{}@example.com", id),
        referral_code: format!("REF-{id}"),
        status: TeamMemberStatus::Active,
        onboarded_users: 0,
        total_subscriptions: 0,
        monthly_new_subscriptions: 0,
        last_month_new_subscriptions: 0,
        created_at: Utc::now(),
    }
}

/// Records every descriptor it resolves and returns one user row.
#[derive(Clone, Default)]
struct RecordingUserResolver {
    calls: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl RecordingUserResolver {
    fn descriptors(&self) -> Vec<RequestDescriptor> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl ListResolver<User> for RecordingUserResolver {
    async fn resolve(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<User>> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(descriptor.clone());
        Ok(PageResult::new(
            vec![sample_user("u1")],
            1,
            descriptor.page(),
            descriptor.limit(),
        ))
    }
}

/// Records descriptors and returns empty verification pages.
#[derive(Clone, Default)]
struct RecordingKycResolver {
    calls: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl RecordingKycResolver {
    fn call_count(&self) -> usize {
        self.calls.lock().expect("lock poisoned").len()
    }
}

#[async_trait::async_trait]
impl ListResolver<KycRecord> for RecordingKycResolver {
    async fn resolve(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<KycRecord>> {
        self.calls
            .lock()
            .expect("lock poisoned")
            .push(descriptor.clone());
        Ok(PageResult::new(
            Vec::new(),
            0,
            descriptor.page(),
            descriptor.limit(),
        ))
    }
}

#[tokio::test]
async fn delete_user_refreshes_with_the_query_unchanged() {
    let resolver = RecordingUserResolver::default();
    let query = QueryState::new()
        .filter("status", "suspended")
        .search("bob")
        .paginate(1, 25);
    let mut view = ListView::with_query(query, resolver.clone());
    view.refresh().await;

    let user_id = UserId::new("u1").expect("valid id");
    let mut api = MockApi::new();
    api.expect_delete_user()
        .with(eq(user_id.clone()))
        .times(1)
        .returning(|_| Ok(()));

    users::delete_user(&api, &mut view, &user_id)
        .await
        .expect("delete should succeed");

    let descriptors = resolver.descriptors();
    assert_eq!(descriptors.len(), 2);
    // The refresh re-used the filter/search/page state exactly.
    assert_eq!(descriptors[0], descriptors[1]);
}

#[tokio::test]
async fn failed_mutation_leaves_the_list_untouched() {
    let resolver = RecordingUserResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());
    view.refresh().await;

    let user_id = UserId::new("u1").expect("valid id");
    let mut api = MockApi::new();
    api.expect_delete_user()
        .times(1)
        .returning(|_| Err(FetchError::Server("boom".into())));

    let err = users::delete_user(&api, &mut view, &user_id)
        .await
        .expect_err("delete should fail");

    assert!(matches!(
        err,
        ServiceError::Fetch(FetchError::Server(_))
    ));
    // No refresh happened: only the initial fetch is on record.
    assert_eq!(resolver.descriptors().len(), 1);
    assert!(view.view().loaded().is_some());
}

#[tokio::test]
async fn set_user_status_refreshes_on_success() {
    let resolver = RecordingUserResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());
    view.refresh().await;

    let user_id = UserId::new("u7").expect("valid id");
    let mut api = MockApi::new();
    api.expect_set_user_status()
        .with(eq(user_id.clone()), eq(UserStatus::Suspended))
        .times(1)
        .returning(|_, _| Ok(()));

    users::set_user_status(&api, &mut view, &user_id, UserStatus::Suspended)
        .await
        .expect("status change should succeed");

    assert_eq!(resolver.descriptors().len(), 2);
}

#[tokio::test]
async fn load_users_page_combines_stats_and_rows() {
    let resolver = RecordingUserResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());

    let mut api = MockApi::new();
    api.expect_user_stats().times(1).returning(|| {
        Ok(UserStats {
            total_users: 42,
            active_users: 40,
            kyc_pending: 2,
            total_volume: 1250.0,
        })
    });

    let page = users::load_users_page(&api, &mut view)
        .await
        .expect("page load should succeed");

    assert_eq!(page.stats.total_users, 42);
    assert_eq!(page.users.rows().len(), 1);
    assert_eq!(resolver.descriptors().len(), 1);
}

#[tokio::test]
async fn load_users_page_stops_when_stats_fail() {
    let resolver = RecordingUserResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());

    let mut api = MockApi::new();
    api.expect_user_stats()
        .times(1)
        .returning(|| Err(FetchError::Auth));

    let err = users::load_users_page(&api, &mut view)
        .await
        .expect_err("page load should fail");

    assert!(matches!(err, ServiceError::Fetch(FetchError::Auth)));
    assert_eq!(resolver.descriptors().len(), 0);
}

#[tokio::test]
async fn approve_verification_refreshes_the_track_view() {
    let resolver = RecordingKycResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());

    let record_id = KycRecordId::new("k1").expect("valid id");
    let mut api = MockApi::new();
    api.expect_approve_verification()
        .with(eq(VerificationTrack::Kyc), eq(record_id.clone()))
        .times(1)
        .returning(|_, _| Ok(()));

    kyc_service::approve_verification(&api, &mut view, VerificationTrack::Kyc, &record_id)
        .await
        .expect("approval should succeed");

    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn rejecting_without_a_reason_never_reaches_the_backend() {
    let resolver = RecordingKycResolver::default();
    let mut view = ListView::with_query(QueryState::new(), resolver.clone());

    let record_id = KycRecordId::new("k1").expect("valid id");
    // No expectations: any call on the mock is a failure.
    let api = MockApi::new();

    let err = kyc_service::reject_verification(
        &api,
        &mut view,
        VerificationTrack::Kyb,
        &record_id,
        "   ",
    )
    .await
    .expect_err("blank reason must be rejected");

    assert!(matches!(err, ServiceError::TypeConstraint(_)));
    assert_eq!(resolver.call_count(), 0);
}

#[tokio::test]
async fn load_verifications_page_combines_stats_and_rows() {
    let resolver = RecordingKycResolver::default();
    let mut view = ListView::with_query(QueryState::new().filter("status", "pending"), resolver.clone());

    let mut api = MockApi::new();
    api.expect_verification_stats().times(1).returning(|| {
        Ok(KycKybStats {
            kyc_pending: 5,
            ..KycKybStats::default()
        })
    });

    let page = kyc_service::load_verifications_page(&api, &mut view, VerificationTrack::Kyc)
        .await
        .expect("page load should succeed");

    assert_eq!(page.stats.kyc_pending, 5);
    assert_eq!(page.track, VerificationTrack::Kyc);
    assert_eq!(page.records.total(), 0);
    assert_eq!(resolver.call_count(), 1);
}

#[tokio::test]
async fn load_team_page_returns_the_roster() {
    let mut api = MockApi::new();
    api.expect_list_team()
        .times(1)
        .returning(|| Ok(vec![member("m1", "Sales One")]));

    let page = team::load_team_page(&api)
        .await
        .expect("roster load should succeed");

    assert_eq!(page.members.len(), 1);
    assert_eq!(page.members[0].name, "Sales One");
}

#[tokio::test]
async fn save_profile_sends_the_password_pair_only_when_changed() {
    let updates = UpdateProfile::new("Admin", "admin@example.com")
        .expect("valid profile")
        .change_password("old-secret", "new-secret")
        .expect("valid password pair");

    let mut api = MockApi::new();
    api.expect_update_profile()
        .withf(|u| u.current_password.is_some() && u.new_password.is_some())
        .times(1)
        .returning(|_| Ok(()));

    settings::save_profile(&api, &updates)
        .await
        .expect("profile save should succeed");

    let plain = UpdateProfile::new("Admin", "admin@example.com").expect("valid profile");
    assert!(plain.current_password.is_none());
    assert!(plain.new_password.is_none());
}

#[tokio::test]
async fn add_team_member_returns_the_refreshed_roster() {
    let new_member =
        NewTeamMember::new("Sales One", "one@example.com", "secret").expect("valid member");

    let mut api = MockApi::new();
    api.expect_create_team_member()
        .times(1)
        .returning(|_| Ok(()));
    api.expect_list_team()
        .times(1)
        .returning(|| Ok(vec![member("m1", "Sales One"), member("m2", "Sales Two")]));

    let roster = team::add_team_member(&api, &new_member)
        .await
        .expect("member creation should succeed");

    assert_eq!(roster.len(), 2);
}

#[tokio::test]
async fn remove_team_member_surfaces_backend_rejections() {
    let member_id = TeamMemberId::new("m1").expect("valid id");

    let mut api = MockApi::new();
    api.expect_delete_team_member()
        .with(eq(member_id.clone()))
        .times(1)
        .returning(|_| Err(FetchError::Validation("member has active referrals".into())));

    let err = team::remove_team_member(&api, &member_id)
        .await
        .expect_err("removal should fail");

    assert!(matches!(
        err,
        ServiceError::Fetch(FetchError::Validation(_))
    ));
}
