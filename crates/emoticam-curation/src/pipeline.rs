//! Top-level video selection flow.
//!
//! ```text
//! selected ──► fetched ──► assembled
//!                 │  ▲
//!           empty │  │
//!                 ▼  │
//!          dynamic fallback
//! ```
//!
//! A fetch error on the primary phrase skips straight to the curated list
//! with an "unavailable" note. At most two sequential outbound calls are
//! made per run.

use std::fmt;
use std::sync::Arc;

use emoticam_models::{AnalysisResult, ResultPayload};
use tracing::{info, warn};

use crate::assembler::{assemble, unavailable};
use crate::fallback;
use crate::search::VideoSearch;
use crate::selector::QuerySelector;

/// Inputs for one run.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    /// Candidate phrases proposed by the analysis step
    pub phrases: Vec<String>,
    pub analysis: Option<AnalysisResult>,
    /// Captured photo, passed through to the selector
    pub photo: Option<String>,
}

/// Which tier produced the videos in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTier {
    /// The selected phrase returned screened videos
    Live,
    /// The selected phrase came back empty; the fallback chain supplied videos
    DynamicFallback,
    /// The live search failed; curated videos only
    Unavailable,
}

impl DeliveryTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTier::Live => "live",
            DeliveryTier::DynamicFallback => "dynamic_fallback",
            DeliveryTier::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for DeliveryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one run. Always carries a successful payload.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub payload: ResultPayload,
    pub tier: DeliveryTier,
}

/// Query selection, live search and fallback chain over a search backend.
#[derive(Clone)]
pub struct VideoPipeline {
    search: Arc<dyn VideoSearch>,
    selector: Arc<dyn QuerySelector>,
}

impl VideoPipeline {
    pub fn new(search: Arc<dyn VideoSearch>, selector: Arc<dyn QuerySelector>) -> Self {
        Self { search, selector }
    }

    /// Run the pipeline. Never fails: every error has a degraded payload.
    pub async fn run(&self, input: &SearchInput) -> PipelineOutcome {
        let selected = self.selector.select(
            input.analysis.as_ref(),
            &input.phrases,
            input.photo.as_deref(),
        );
        info!(
            query = %selected,
            selector = self.selector.name(),
            "Selected search query"
        );

        let videos = match self.search.search(&selected).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!(query = %selected, error = %e, "Video search failed, serving curated videos");
                return PipelineOutcome {
                    payload: unavailable(fallback::static_videos()),
                    tier: DeliveryTier::Unavailable,
                };
            }
        };
        info!(query = %selected, count = videos.len(), "Videos fetched");

        let (videos, tier) = if videos.is_empty() {
            warn!(query = %selected, "No videos found, using dynamic fallback");
            (fallback::dynamic(self.search.as_ref()).await, DeliveryTier::DynamicFallback)
        } else {
            (videos, DeliveryTier::Live)
        };

        let ranking = input
            .analysis
            .as_ref()
            .and_then(|a| a.query_ranking.as_ref());

        PipelineOutcome {
            payload: assemble(videos, &selected, ranking),
            tier,
        }
    }
}
