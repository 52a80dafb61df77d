//! Child photo analysis handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use emoticam_models::AnalysisResult;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::security::extract_image_base64;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionRequest {
    #[serde(default)]
    pub image_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EmotionResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

/// Analyze a webcam photo of a child.
pub async fn analyze_emotion(
    State(state): State<AppState>,
    body: Result<Json<EmotionRequest>, JsonRejection>,
) -> ApiResult<Json<EmotionResponse>> {
    let Json(request) = body.map_err(|e| {
        warn!(error = %e, "Rejected analysis request body");
        ApiError::bad_request(e.body_text())
    })?;

    let image_data = request
        .image_data
        .filter(|data| !data.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("No image data provided"))?;

    let image = extract_image_base64(&image_data).map_err(ApiError::bad_request)?;
    info!(bytes = image.len(), "Analyzing child photo");

    let outcome = state.analyzer.analyze(&image).await.map_err(|e| {
        error!(error = %e, "Error analyzing expression");
        ApiError::upstream("Failed to analyze child's expression")
    })?;

    metrics::record_analysis(outcome.source.as_str());
    info!(source = outcome.source.as_str(), "Analysis completed");

    Ok(Json(EmotionResponse {
        success: true,
        analysis: outcome.analysis,
    }))
}
