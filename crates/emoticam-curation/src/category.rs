//! Phrase → category mapping.

use emoticam_models::VideoCategory;

/// Keyword patterns, tested in order. First match wins.
const CATEGORY_PATTERNS: &[(VideoCategory, &[&str])] = &[
    (VideoCategory::MusicAndMovement, &["song", "music", "dance"]),
    (VideoCategory::ArtsAndCrafts, &["craft", "art", "creative"]),
    (
        VideoCategory::Educational,
        &["learn", "educational", "abc", "number"],
    ),
    (VideoCategory::StoriesAndBooks, &["story", "tale", "book"]),
    (VideoCategory::ScienceAndDiscovery, &["science", "experiment"]),
];

/// Categorize a video by the phrase that found it.
pub fn categorize(phrase: &str) -> VideoCategory {
    let lower = phrase.to_lowercase();
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_bucket() {
        assert_eq!(categorize("dinosaur songs for kids"), VideoCategory::MusicAndMovement);
        assert_eq!(categorize("simple crafts activities children"), VideoCategory::ArtsAndCrafts);
        assert_eq!(categorize("Numbers Counting"), VideoCategory::Educational);
        assert_eq!(categorize("bedtime story time"), VideoCategory::StoriesAndBooks);
        assert_eq!(categorize("kitchen science"), VideoCategory::ScienceAndDiscovery);
        assert_eq!(categorize("Shapes for Kids"), VideoCategory::GeneralLearning);
    }

    #[test]
    fn test_priority_order() {
        // Matches both music and stories; music is tested first
        assert_eq!(categorize("story songs"), VideoCategory::MusicAndMovement);
        // "party" contains "art"
        assert_eq!(categorize("learning party"), VideoCategory::ArtsAndCrafts);
    }

    #[test]
    fn test_idempotent() {
        for phrase in ["Alphabet Song", "Colors Learning", "", "storytelling videos kids animated"] {
            assert_eq!(categorize(phrase), categorize(phrase));
        }
    }
}
