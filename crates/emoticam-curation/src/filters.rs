//! Keyword screens for safety and educational value.
//!
//! Both screens use plain substring containment on the case-folded blob of
//! title, description and channel (see [`crate::text::screening_text`]).
//! There is no stemming and no word boundary check, so the safety screen
//! over-rejects ("skill" contains "kill") rather than under-rejects.

use tracing::debug;

use crate::text::screening_text;

/// Terms that disqualify a video outright.
pub const UNSAFE_KEYWORDS: &[&str] = &[
    "scary",
    "horror",
    "violence",
    "blood",
    "death",
    "kill",
    "weapon",
    "gun",
    "knife",
    "adult",
    "mature",
    "inappropriate",
    "explicit",
    "crude",
    "vulgar",
    "offensive",
    "monster",
    "nightmare",
    "creepy",
    "dark",
    "evil",
    "demon",
    "ghost",
    "zombie",
];

/// Terms that signal learning content.
pub const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "learn",
    "education",
    "teach",
    "school",
    "abc",
    "number",
    "count",
    "color",
    "shape",
    "song",
    "nursery",
    "kids",
];

/// Channel markers that count as educational on their own.
pub const TRUSTED_CHANNELS: &[&str] = &[
    "super simple songs",
    "sesame street",
    "pbs kids",
    "educational",
    "learn",
];

/// Whether no field of the video contains a deny-listed term.
pub fn is_safe(title: &str, description: &str, channel: &str) -> bool {
    let text = screening_text(title, description, channel);
    match UNSAFE_KEYWORDS.iter().find(|k| text.contains(*k)) {
        Some(term) => {
            debug!(term = %term, title = %title, "Unsafe content detected");
            false
        }
        None => true,
    }
}

/// Whether the video carries an educational keyword or a trusted channel.
pub fn is_educational(title: &str, description: &str, channel: &str) -> bool {
    let text = screening_text(title, description, channel);
    let educational = EDUCATIONAL_KEYWORDS.iter().any(|k| text.contains(k))
        || TRUSTED_CHANNELS.iter().any(|c| text.contains(c));
    if !educational {
        debug!(title = %title, "Non-educational content");
    }
    educational
}
