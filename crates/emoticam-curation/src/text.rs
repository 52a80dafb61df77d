//! Free-text normalization for titles and descriptions.

/// Clean a free-text field for display.
///
/// Strips `**` bold markers, turns newlines into spaces, collapses runs of
/// whitespace and trims. `None` becomes an empty string.
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.replace("**", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-folded blob the keyword screens run against.
///
/// Built from the raw (uncleaned) fields so markup cannot hide a term.
pub fn screening_text(title: &str, description: &str, channel: &str) -> String {
    format!("{} {} {}", title, description, channel).to_lowercase()
}
