//! Video search backend seam.

use async_trait::async_trait;
use emoticam_models::VideoCandidate;

use crate::error::FetchResult;

/// A video platform that can be searched by phrase.
///
/// Implementations return only candidates that passed both keyword screens;
/// rejected hits are dropped, not marked unsafe.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Name of the backend for logging.
    fn name(&self) -> &'static str;

    /// Run one search request for `phrase`.
    async fn search(&self, phrase: &str) -> FetchResult<Vec<VideoCandidate>>;
}
