use async_trait::async_trait;

use crate::api::{VerificationReader, VerificationWriter};
use crate::domain::kyc::{KycRecord, VerificationTrack};
use crate::domain::types::KycRecordId;
use crate::dto::kyc::VerificationsPageData;
use crate::listview::{FetchResult, ListResolver, ListView, PageResult, RequestDescriptor};
use crate::services::{ServiceError, ServiceResult};

/// Resolver feeding one verification track's list view.
pub struct VerificationListSource<A> {
    api: A,
    track: VerificationTrack,
}

impl<A> VerificationListSource<A> {
    pub fn new(api: A, track: VerificationTrack) -> Self {
        Self { api, track }
    }
}

#[async_trait]
impl<A> ListResolver<KycRecord> for VerificationListSource<A>
where
    A: VerificationReader,
{
    async fn resolve(&self, descriptor: &RequestDescriptor) -> FetchResult<PageResult<KycRecord>> {
        self.api.list_verifications(self.track, descriptor).await
    }
}

/// Builds the list view for one verification track (KYC or KYB).
pub fn verifications_view<A>(
    api: A,
    track: VerificationTrack,
) -> ListView<KycRecord, VerificationListSource<A>>
where
    A: VerificationReader,
{
    ListView::new(VerificationListSource::new(api, track))
}

/// Loads one verification track's screen: combined stats plus the current
/// page of submissions.
pub async fn load_verifications_page<A, R>(
    api: &A,
    view: &mut ListView<KycRecord, R>,
    track: VerificationTrack,
) -> ServiceResult<VerificationsPageData>
where
    A: VerificationReader + ?Sized,
    R: ListResolver<KycRecord>,
{
    let stats = api.verification_stats().await.map_err(|err| {
        log::error!("Failed to load verification stats: {err}");
        ServiceError::from(err)
    })?;

    let page_size = view.query().page_size();
    let state = view.refresh().await;
    if let Some(err) = state.error() {
        log::error!("Failed to list verifications: {err}");
        return Err(ServiceError::Fetch(err.clone()));
    }
    let records = state
        .loaded()
        .cloned()
        .unwrap_or_else(|| PageResult::new(Vec::new(), 0, 1, page_size));

    Ok(VerificationsPageData {
        track,
        stats,
        records,
    })
}

/// Approves a submission, then refreshes the list.
pub async fn approve_verification<A, R>(
    api: &A,
    view: &mut ListView<KycRecord, R>,
    track: VerificationTrack,
    record_id: &KycRecordId,
) -> ServiceResult<()>
where
    A: VerificationWriter + ?Sized,
    R: ListResolver<KycRecord>,
{
    api.approve_verification(track, record_id)
        .await
        .map_err(|err| {
            log::error!("Failed to approve submission {record_id}: {err}");
            ServiceError::from(err)
        })?;

    view.refresh().await;
    Ok(())
}

/// Rejects a submission with a mandatory reason, then refreshes the list.
pub async fn reject_verification<A, R>(
    api: &A,
    view: &mut ListView<KycRecord, R>,
    track: VerificationTrack,
    record_id: &KycRecordId,
    reason: &str,
) -> ServiceResult<()>
where
    A: VerificationWriter + ?Sized,
    R: ListResolver<KycRecord>,
{
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ServiceError::TypeConstraint(
            "rejection reason cannot be empty".to_string(),
        ));
    }

    api.reject_verification(track, record_id, reason)
        .await
        .map_err(|err| {
            log::error!("Failed to reject submission {record_id}: {err}");
            ServiceError::from(err)
        })?;

    view.refresh().await;
    Ok(())
}
