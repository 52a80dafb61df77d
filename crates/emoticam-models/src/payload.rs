//! Search response payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::QueryRanking;
use crate::video::VideoCandidate;

/// Maximum number of videos returned in one payload.
pub const MAX_RESULT_VIDEOS: usize = 15;

/// Response body of the video search endpoint.
///
/// Every fallback tier produces a payload with `success == true`; degraded
/// results are explained through `note`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    pub success: bool,

    /// At most [`MAX_RESULT_VIDEOS`] entries
    pub videos: Vec<VideoCandidate>,

    /// Number of videos found before truncation
    pub total_found: usize,

    /// Phrase that was executed against the platform
    pub selected_query: String,

    /// Ranking block carried through from the analysis
    pub query_ranking: Option<QueryRanking>,

    /// Phrases considered for this response
    pub search_queries: Vec<String>,

    /// Provenance or fallback explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
