//! Video search handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use emoticam_curation::SearchInput;
use emoticam_models::{AnalysisResult, ResultPayload};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::{validate_search_queries, QueryValidationResult};
use crate::state::AppState;

/// Pick safe videos for the phrases proposed by a child analysis.
///
/// Body: `{ searchQueries: [string], childAnalysis?: object, ImageData?: any }`.
/// Upstream failures degrade to fallback payloads; only input and
/// configuration problems are errors.
pub async fn search_videos(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ResultPayload>> {
    let Json(body) = body.map_err(|e| {
        warn!(error = %e, "Rejected search request body");
        ApiError::bad_request(e.body_text())
    })?;

    let phrases = match validate_search_queries(body.get("searchQueries")) {
        QueryValidationResult::Missing => {
            warn!("No search queries provided");
            return Err(ApiError::bad_request("No search queries provided"));
        }
        other => other.into_result().map_err(ApiError::validation)?,
    };

    let analysis = parse_child_analysis(body.get("childAnalysis"))?;
    let photo = body
        .get("ImageData")
        .and_then(Value::as_str)
        .map(str::to_string);

    let Some(pipeline) = state.video_pipeline.as_ref() else {
        error!("YouTube API key not configured");
        return Err(ApiError::configuration("YouTube API key not configured"));
    };

    info!(
        phrases = phrases.len(),
        has_analysis = analysis.is_some(),
        "Search requested"
    );

    let input = SearchInput {
        phrases,
        analysis,
        photo,
    };
    let outcome = pipeline.run(&input).await;

    metrics::record_search_outcome(outcome.tier.as_str(), outcome.payload.videos.len());
    info!(
        tier = %outcome.tier,
        videos = outcome.payload.videos.len(),
        query = %outcome.payload.selected_query,
        "Search completed"
    );

    Ok(Json(outcome.payload))
}

/// `null` and absent are both "no analysis"; anything else must deserialize.
fn parse_child_analysis(value: Option<&Value>) -> ApiResult<Option<AnalysisResult>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value(raw.clone())
            .map(Some)
            .map_err(|e| ApiError::validation(format!("Invalid childAnalysis: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_child_analysis() {
        assert!(parse_child_analysis(None).unwrap().is_none());
        assert!(parse_child_analysis(Some(&Value::Null)).unwrap().is_none());

        let parsed = parse_child_analysis(Some(&json!({
            "queryRanking": { "bestMatch": "counting songs", "reason": "calm", "rankedQueries": [] }
        })))
        .unwrap()
        .unwrap();
        assert_eq!(parsed.query_ranking.unwrap().best_match, "counting songs");

        assert!(parse_child_analysis(Some(&json!("happy"))).is_err());
        assert!(parse_child_analysis(Some(&json!(42))).is_err());

        let echoed = parse_child_analysis(Some(&json!({
            "childAnalysis": { "moodIndicators": ["calm", "focused"] },
            "queryRanking": { "rankedQueries": [{ "query": "counting songs", "score": "75" }] }
        })))
        .unwrap()
        .unwrap();
        assert_eq!(echoed.child_analysis.unwrap().mood_indicators, "calm, focused");
        assert_eq!(echoed.query_ranking.unwrap().lead_score(), Some(75.0));
    }
}
