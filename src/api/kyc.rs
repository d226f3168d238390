//! KYC/KYB verification endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::api::client::ApiClient;
use crate::api::{VerificationReader, VerificationWriter};
use crate::domain::kyc::{KycKybStats, KycRecord, VerificationTrack};
use crate::domain::types::KycRecordId;
use crate::listview::{FetchResult, PageResult, RequestDescriptor};
use crate::models::envelope::ListEnvelope;

#[async_trait]
impl VerificationReader for ApiClient {
    async fn list_verifications(
        &self,
        track: VerificationTrack,
        descriptor: &RequestDescriptor,
    ) -> FetchResult<PageResult<KycRecord>> {
        let path = format!("/admin/{}", track.as_path());
        let envelope: ListEnvelope<KycRecord> = self.get_list(&path, descriptor).await?;
        Ok(envelope.into_page(descriptor.page(), descriptor.limit()))
    }

    async fn verification_stats(&self) -> FetchResult<KycKybStats> {
        self.get_json("/admin/kyc-kyb/stats").await
    }
}

#[async_trait]
impl VerificationWriter for ApiClient {
    async fn approve_verification(
        &self,
        track: VerificationTrack,
        id: &KycRecordId,
    ) -> FetchResult<()> {
        self.send_empty(
            Method::PATCH,
            &format!("/admin/{}/{id}/approve", track.as_path()),
        )
        .await
    }

    async fn reject_verification(
        &self,
        track: VerificationTrack,
        id: &KycRecordId,
        reason: &str,
    ) -> FetchResult<()> {
        self.send_json(
            Method::PATCH,
            &format!("/admin/{}/{id}/reject", track.as_path()),
            &json!({ "rejectionReason": reason }),
        )
        .await
    }
}
