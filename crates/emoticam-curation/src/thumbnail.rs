//! Placeholder thumbnails for videos without one.

use rand::Rng;

const SLUG_LEN: usize = 8;
const SUFFIX_LEN: usize = 3;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Build a stand-in thumbnail URL from a title.
///
/// The identifier is the first eight lowercase alphanumerics of the title
/// plus a short random suffix. The URL follows the platform's thumbnail
/// template but is not guaranteed to resolve.
pub fn synthesize_thumbnail(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(SLUG_LEN)
        .collect();

    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();

    format!("https://img.youtube.com/vi/{}{}/maxresdefault.jpg", slug, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier(url: &str) -> &str {
        url.trim_start_matches("https://img.youtube.com/vi/")
            .trim_end_matches("/maxresdefault.jpg")
    }

    #[test]
    fn test_slug_truncated_and_suffixed() {
        let url = synthesize_thumbnail("Counting 1-20 with Elmo!");
        let id = identifier(&url);
        assert_eq!(id.len(), SLUG_LEN + SUFFIX_LEN);
        assert!(id.starts_with("counting"));
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_short_and_non_ascii_titles() {
        let url = synthesize_thumbnail("ABC");
        assert!(identifier(&url).starts_with("abc"));
        assert_eq!(identifier(&url).len(), 3 + SUFFIX_LEN);

        let url = synthesize_thumbnail("¡Canción!");
        assert!(identifier(&url).starts_with("cancin"));
    }
}
