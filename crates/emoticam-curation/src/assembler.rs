//! Result assembly: dedupe, screen, order, truncate, explain.

use std::collections::HashSet;

use emoticam_models::{QueryRanking, ResultPayload, VideoCandidate, MAX_RESULT_VIDEOS};

/// Phrase reported when the pipeline could not run at all.
pub const UNAVAILABLE_QUERY: &str = "educational content for kids";

/// Note attached to the short-circuit payload.
pub const UNAVAILABLE_NOTE: &str =
    "Showing curated recommendations - YouTube API temporarily unavailable";

/// Drop later candidates whose watch URL was already seen.
pub fn dedupe_by_url(videos: Vec<VideoCandidate>) -> Vec<VideoCandidate> {
    let mut seen = HashSet::new();
    videos
        .into_iter()
        .filter(|v| seen.insert(v.url.clone()))
        .collect()
}

/// Build the response payload from fetched candidates.
///
/// Steps run in this order:
/// 1. dedupe by watch URL (first occurrence wins),
/// 2. keep only age-appropriate educational candidates,
/// 3. stable-sort Child-Safe entries first,
/// 4. truncate to [`MAX_RESULT_VIDEOS`] while reporting the full count,
/// 5. attach provenance.
pub fn assemble(
    candidates: Vec<VideoCandidate>,
    selected_query: &str,
    ranking: Option<&QueryRanking>,
) -> ResultPayload {
    let mut videos: Vec<VideoCandidate> = dedupe_by_url(candidates)
        .into_iter()
        .filter(VideoCandidate::is_presentable)
        .collect();

    // sort_by_key is stable
    videos.sort_by_key(|v| !v.safety_rating.is_child_safe());

    let total_found = videos.len();
    videos.truncate(MAX_RESULT_VIDEOS);

    ResultPayload {
        success: true,
        videos,
        total_found,
        selected_query: selected_query.to_string(),
        query_ranking: ranking.cloned(),
        search_queries: vec![selected_query.to_string()],
        note: Some(provenance_note(selected_query, ranking)),
    }
}

/// Payload for when the live search failed outright.
pub fn unavailable(videos: Vec<VideoCandidate>) -> ResultPayload {
    ResultPayload {
        success: true,
        total_found: videos.len(),
        videos,
        selected_query: UNAVAILABLE_QUERY.to_string(),
        query_ranking: None,
        search_queries: Vec::new(),
        note: Some(UNAVAILABLE_NOTE.to_string()),
    }
}

fn provenance_note(selected_query: &str, ranking: Option<&QueryRanking>) -> String {
    match ranking {
        Some(ranking) => {
            // A zero score reads as missing
            let score = ranking
                .lead_score()
                .filter(|s| *s != 0.0 && !s.is_nan())
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!(
                "AI selected: \"{}\" (Score: {}) - {}",
                selected_query, score, ranking.reason
            )
        }
        None => format!("Results focused on: \"{}\"", selected_query),
    }
}
