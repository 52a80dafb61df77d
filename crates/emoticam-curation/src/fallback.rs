//! Fallback tiers for when the live search comes back empty.
//!
//! Tiers escalate in order:
//! 1. [`random_query`] picks a generic learning topic,
//! 2. [`dynamic`] runs one live search for that topic,
//! 3. [`static_videos`] returns curated records with no network call.

use emoticam_models::{SafetyRating, VideoCandidate, VideoCategory};
use rand::prelude::IndexedRandom;
use tracing::{info, warn};

use crate::assembler::dedupe_by_url;
use crate::search::VideoSearch;
use crate::thumbnail::synthesize_thumbnail;

/// Generic learning topics used when no usable phrase exists.
pub const FALLBACK_QUERIES: &[&str] = &[
    "Alphabet Song",
    "Numbers Counting",
    "Colors Learning",
    "Shapes for Kids",
];

struct CuratedVideo {
    title: &'static str,
    channel: &'static str,
    description: &'static str,
    duration: &'static str,
    video_id: &'static str,
}

const CURATED_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "ABC Song",
        channel: "Super Simple Songs",
        description: "Learn ABC",
        duration: "3:15",
        video_id: "abc123",
    },
    CuratedVideo {
        title: "Counting 1-20",
        channel: "Sesame Street",
        description: "Counting video",
        duration: "5:20",
        video_id: "count456",
    },
];

/// Uniformly pick one of [`FALLBACK_QUERIES`].
pub fn random_query() -> &'static str {
    FALLBACK_QUERIES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_QUERIES[0])
}

/// Retry the live search once with a generic topic.
///
/// An empty result or a failed request degrades to [`static_videos`].
pub async fn dynamic(search: &dyn VideoSearch) -> Vec<VideoCandidate> {
    let query = random_query();
    info!(query = %query, backend = search.name(), "Dynamic fallback query");

    match search.search(query).await {
        Ok(videos) if videos.is_empty() => {
            warn!(query = %query, "Dynamic fallback found nothing, using curated videos");
            static_videos()
        }
        Ok(videos) => dedupe_by_url(videos),
        Err(e) => {
            warn!(query = %query, error = %e, "Dynamic fallback failed, using curated videos");
            static_videos()
        }
    }
}

/// Curated, pre-screened videos. Cannot fail.
pub fn static_videos() -> Vec<VideoCandidate> {
    CURATED_VIDEOS
        .iter()
        .map(|v| VideoCandidate {
            title: v.title.to_string(),
            channel: v.channel.to_string(),
            description: v.description.to_string(),
            duration: v.duration.to_string(),
            url: format!("https://youtube.com/watch?v={}", v.video_id),
            thumbnail: synthesize_thumbnail(v.title),
            video_id: v.video_id.to_string(),
            age_appropriate: true,
            educational: true,
            safety_rating: SafetyRating::ChildSafe,
            category: VideoCategory::Educational,
            search_query: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, FetchResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Search backend that replays canned results and records phrases.
    struct ScriptedSearch {
        results: Mutex<Vec<FetchResult<Vec<VideoCandidate>>>>,
        phrases: Mutex<Vec<String>>,
    }

    impl ScriptedSearch {
        fn new(results: Vec<FetchResult<Vec<VideoCandidate>>>) -> Self {
            Self {
                results: Mutex::new(results),
                phrases: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VideoSearch for ScriptedSearch {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn search(&self, phrase: &str) -> FetchResult<Vec<VideoCandidate>> {
            self.phrases.lock().unwrap().push(phrase.to_string());
            self.results.lock().unwrap().remove(0)
        }
    }

    fn live(id: &str) -> VideoCandidate {
        VideoCandidate {
            title: format!("Song {}", id),
            channel: "Kids Channel".to_string(),
            description: "Learn colors".to_string(),
            duration: "Short video".to_string(),
            url: format!("https://www.youtube.com/watch?v={}", id),
            thumbnail: String::new(),
            video_id: id.to_string(),
            age_appropriate: true,
            educational: true,
            safety_rating: SafetyRating::ChildSafe,
            category: VideoCategory::MusicAndMovement,
            search_query: Some("Alphabet Song".to_string()),
        }
    }

    #[test]
    fn test_random_query_from_fixed_list() {
        for _ in 0..20 {
            assert!(FALLBACK_QUERIES.contains(&random_query()));
        }
    }

    #[test]
    fn test_static_videos_are_stamped() {
        let videos = static_videos();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].url, "https://youtube.com/watch?v=abc123");
        assert_eq!(videos[1].channel, "Sesame Street");
        for v in &videos {
            assert!(v.is_presentable());
            assert_eq!(v.safety_rating, SafetyRating::ChildSafe);
            assert_eq!(v.category, VideoCategory::Educational);
            assert!(v.thumbnail.starts_with("https://img.youtube.com/vi/"));
        }
    }

    #[tokio::test]
    async fn test_dynamic_returns_deduped_live_results() {
        let search = ScriptedSearch::new(vec![Ok(vec![live("a"), live("a"), live("b")])]);
        let videos = dynamic(&search).await;

        assert_eq!(videos.len(), 2);
        let phrases = search.phrases.lock().unwrap();
        assert_eq!(phrases.len(), 1);
        assert!(FALLBACK_QUERIES.contains(&phrases[0].as_str()));
    }

    #[tokio::test]
    async fn test_dynamic_empty_degrades_to_static() {
        let search = ScriptedSearch::new(vec![Ok(Vec::new())]);
        let videos = dynamic(&search).await;
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].video_id, "abc123");
    }

    #[tokio::test]
    async fn test_dynamic_error_degrades_to_static() {
        let search = ScriptedSearch::new(vec![Err(FetchError::transport("connection refused"))]);
        let videos = dynamic(&search).await;
        assert_eq!(videos.len(), 2);
    }
}
