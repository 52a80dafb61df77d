//! Health check handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// Liveness check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check response.
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    pub video_search: CheckStatus,
    pub vision: CheckStatus,
}

#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckStatus {
    fn configured(present: bool, missing: &str) -> Self {
        if present {
            Self {
                status: "ok".to_string(),
                error: None,
            }
        } else {
            Self {
                status: "error".to_string(),
                error: Some(missing.to_string()),
            }
        }
    }
}

/// Readiness check endpoint.
/// Reports whether each upstream credential is configured; no outbound calls.
pub async fn ready(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let video_search = CheckStatus::configured(
        state.video_pipeline.is_some(),
        "YouTube API key not configured",
    );
    let vision = CheckStatus::configured(
        state.config.vision_api_key.is_some(),
        "Vision API key not configured",
    );

    let all_ok = video_search.status == "ok" && vision.status == "ok";

    let response = ReadinessResponse {
        status: if all_ok { "ready" } else { "degraded" }.to_string(),
        checks: ReadinessChecks {
            video_search,
            vision,
        },
    };

    if all_ok {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
