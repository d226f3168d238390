use crate::domain::kyc::{KycKybStats, KycRecord, VerificationTrack};
use crate::listview::PageResult;

/// Data required to render one verification track of the KYC/KYB screen.
#[derive(Debug, Clone)]
pub struct VerificationsPageData {
    pub track: VerificationTrack,
    /// Counters are combined across both tracks.
    pub stats: KycKybStats,
    pub records: PageResult<KycRecord>,
}
