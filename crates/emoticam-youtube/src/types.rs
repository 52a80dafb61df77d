//! Subset of the `search.list` response this client reads.

use serde::Deserialize;
use serde_json::Value;

/// Response envelope. Items stay raw so one malformed hit can be skipped
/// without failing the whole page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

impl SearchItem {
    pub fn video_id(&self) -> Option<&str> {
        self.id
            .as_ref()
            .and_then(|id| id.video_id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemId {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "channelTitle", default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

impl Snippet {
    /// URL of the high-resolution thumbnail, if the platform sent one.
    pub fn high_thumbnail(&self) -> Option<&str> {
        self.thumbnails
            .as_ref()
            .and_then(|t| t.high.as_ref())
            .and_then(|t| t.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
}
