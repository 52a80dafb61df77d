//! Video candidate models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Safety classification attached to every surfaced video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum SafetyRating {
    /// Passed the safety and educational keyword screens
    #[default]
    #[serde(rename = "Child-Safe")]
    ChildSafe,
    /// Surfaced without a positive screen result
    #[serde(rename = "Needs-Review")]
    NeedsReview,
}

impl SafetyRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyRating::ChildSafe => "Child-Safe",
            SafetyRating::NeedsReview => "Needs-Review",
        }
    }

    pub fn is_child_safe(&self) -> bool {
        matches!(self, SafetyRating::ChildSafe)
    }
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Topical bucket derived from the search phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum VideoCategory {
    #[serde(rename = "Music & Movement")]
    MusicAndMovement,
    #[serde(rename = "Arts & Crafts")]
    ArtsAndCrafts,
    #[serde(rename = "Educational")]
    Educational,
    #[serde(rename = "Stories & Books")]
    StoriesAndBooks,
    #[serde(rename = "Science & Discovery")]
    ScienceAndDiscovery,
    #[default]
    #[serde(rename = "General Learning")]
    GeneralLearning,
}

impl VideoCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoCategory::MusicAndMovement => "Music & Movement",
            VideoCategory::ArtsAndCrafts => "Arts & Crafts",
            VideoCategory::Educational => "Educational",
            VideoCategory::StoriesAndBooks => "Stories & Books",
            VideoCategory::ScienceAndDiscovery => "Science & Discovery",
            VideoCategory::GeneralLearning => "General Learning",
        }
    }
}

impl fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized video search hit.
///
/// `url` is the identity key: two candidates with the same watch URL are the
/// same video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoCandidate {
    pub title: String,

    /// Channel display name
    pub channel: String,

    pub description: String,

    /// Human-readable duration label ("3:15", "Short video")
    pub duration: String,

    /// Watch URL
    pub url: String,

    pub thumbnail: String,

    /// Platform video ID
    pub video_id: String,

    pub age_appropriate: bool,

    pub educational: bool,

    pub safety_rating: SafetyRating,

    pub category: VideoCategory,

    /// Phrase that produced this candidate (absent for curated records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl VideoCandidate {
    /// Whether the candidate may be shown to a child at all.
    pub fn is_presentable(&self) -> bool {
        self.age_appropriate && self.educational
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_wire_format() {
        assert_eq!(
            serde_json::to_value(SafetyRating::ChildSafe).unwrap(),
            "Child-Safe"
        );
        assert_eq!(
            serde_json::to_value(VideoCategory::MusicAndMovement).unwrap(),
            "Music & Movement"
        );
        assert_eq!(VideoCategory::ScienceAndDiscovery.to_string(), "Science & Discovery");
    }

    #[test]
    fn test_search_query_omitted_when_absent() {
        let candidate = VideoCandidate {
            title: "ABC Song".to_string(),
            channel: "Super Simple Songs".to_string(),
            description: "Learn ABC".to_string(),
            duration: "3:15".to_string(),
            url: "https://youtube.com/watch?v=abc123".to_string(),
            thumbnail: String::new(),
            video_id: "abc123".to_string(),
            age_appropriate: true,
            educational: true,
            safety_rating: SafetyRating::ChildSafe,
            category: VideoCategory::Educational,
            search_query: None,
        };

        let value = serde_json::to_value(&candidate).unwrap();
        assert!(value.get("searchQuery").is_none());
        assert_eq!(value["videoId"], "abc123");
        assert_eq!(value["ageAppropriate"], true);
        assert!(candidate.is_presentable());
    }
}
