//! YouTube search client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use emoticam_curation::{
    categorize, clean_text, is_educational, is_safe, synthesize_thumbnail, FetchError,
    FetchResult, VideoSearch,
};
use emoticam_models::{SafetyRating, VideoCandidate};
use serde_json::Value;

use crate::types::{SearchItem, SearchResponse};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Results requested per search.
pub const PAGE_SIZE: u32 = 10;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; EmoticamApp)";

/// Duration label for live hits; `search.list` does not return durations.
const LIVE_DURATION_LABEL: &str = "Short video";

/// YouTube Data API client.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl YouTubeClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, Client::new())
    }

    /// Create a client against a custom API root (proxies, tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Turn raw hits into screened candidates.
    fn process_items(&self, items: Vec<Value>, phrase: &str) -> Vec<VideoCandidate> {
        let category = categorize(phrase);

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| {
                let item: SearchItem = match serde_json::from_value(raw) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(index, error = %e, "Skipping malformed search hit");
                        return None;
                    }
                };
                let Some(video_id) = item.video_id().map(str::to_string) else {
                    debug!("Skipping search hit without a video id");
                    return None;
                };
                let snippet = item.snippet.unwrap_or_default();

                let raw_title = snippet.title.as_deref().unwrap_or_default();
                let raw_description = snippet.description.as_deref().unwrap_or_default();
                let raw_channel = snippet.channel_title.as_deref().unwrap_or_default();

                if !is_safe(raw_title, raw_description, raw_channel) {
                    debug!(video_id = %video_id, title = %raw_title, "Rejected unsafe video");
                    return None;
                }
                if !is_educational(raw_title, raw_description, raw_channel) {
                    debug!(video_id = %video_id, title = %raw_title, "Rejected non-educational video");
                    return None;
                }

                let mut description = clean_text(snippet.description.as_deref());
                if description.is_empty() {
                    description = format!("Educational content about {}", phrase);
                }

                let thumbnail = snippet
                    .high_thumbnail()
                    .map(str::to_string)
                    .unwrap_or_else(|| synthesize_thumbnail(raw_title));

                Some(VideoCandidate {
                    title: clean_text(snippet.title.as_deref()),
                    channel: clean_text(snippet.channel_title.as_deref()),
                    description,
                    duration: LIVE_DURATION_LABEL.to_string(),
                    url: format!("https://www.youtube.com/watch?v={}", video_id),
                    thumbnail,
                    video_id,
                    age_appropriate: true,
                    educational: true,
                    safety_rating: SafetyRating::ChildSafe,
                    category,
                    search_query: Some(phrase.to_string()),
                })
            })
            .collect()
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(&self, phrase: &str) -> FetchResult<Vec<VideoCandidate>> {
        let url = format!("{}/search", self.base_url);
        let page_size = PAGE_SIZE.to_string();
        info!(query = %phrase, "Fetching YouTube videos");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", phrase),
                ("type", "video"),
                ("maxResults", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, "YouTube API returned an error");
            return Err(FetchError::status(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(e.to_string()))?;
        let data: SearchResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::decode(e.to_string()))?;

        let received = data.items.len();
        let videos = self.process_items(data.items, phrase);
        info!(
            query = %phrase,
            received,
            accepted = videos.len(),
            "YouTube search complete"
        );

        Ok(videos)
    }
}
