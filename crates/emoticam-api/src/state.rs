//! Application state.

use std::sync::Arc;

use anyhow::Context;
use emoticam_curation::{QuerySelector, VideoPipeline, VideoSearch};
use emoticam_vision::{ChildAnalyzer, VisionClient};
use emoticam_youtube::YouTubeClient;
use reqwest::Client;

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    /// `None` when no video platform key is configured
    pub video_pipeline: Option<VideoPipeline>,
    pub analyzer: Arc<dyn ChildAnalyzer>,
}

impl AppState {
    /// Create new application state with live upstream clients.
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let search: Option<Arc<dyn VideoSearch>> = config.youtube_api_key.as_ref().map(|key| {
            Arc::new(YouTubeClient::with_base_url(
                key.clone(),
                config.youtube_base_url.clone(),
                http.clone(),
            )) as Arc<dyn VideoSearch>
        });

        let analyzer = Arc::new(VisionClient::new(
            config.vision_api_key.clone(),
            config.vision_base_url.clone(),
            config.vision_model.clone(),
            http,
        ));

        Ok(Self::with_services(config, search, analyzer))
    }

    /// Create state around already-built services.
    pub fn with_services(
        config: ApiConfig,
        search: Option<Arc<dyn VideoSearch>>,
        analyzer: Arc<dyn ChildAnalyzer>,
    ) -> Self {
        let selector: Arc<dyn QuerySelector> = Arc::from(config.query_selector.build());
        let video_pipeline = search.map(|search| VideoPipeline::new(search, selector));

        Self {
            config,
            video_pipeline,
            analyzer,
        }
    }
}
