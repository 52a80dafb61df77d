//! Parsing of model output into an analysis result.

use emoticam_models::AnalysisResult;

/// Remove Markdown code fences the model sometimes wraps JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse model text into a complete analysis.
///
/// Returns `Err` with a reason when the text is not JSON or lacks a section
/// the UI requires.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, String> {
    let cleaned = strip_code_fences(text);
    let analysis: AnalysisResult =
        serde_json::from_str(&cleaned).map_err(|e| format!("invalid JSON: {}", e))?;

    if !analysis.is_complete() {
        return Err("invalid analysis structure".to_string());
    }

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = r#"{
        "childAnalysis": { "ageEstimate": "4-6 years", "primaryEmotion": "Happy/Excited" },
        "contentStrategy": { "emotionalNeed": "Fun" },
        "youtubeKidsQueries": ["kids dance movement videos"],
        "queryRanking": { "bestMatch": "kids dance movement videos", "reason": "energy", "rankedQueries": [] }
    }"#;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn test_parse_fenced_complete() {
        let text = format!("```json\n{}\n```", COMPLETE);
        let analysis = parse_analysis(&text).unwrap();
        assert_eq!(analysis.youtube_kids_queries, vec!["kids dance movement videos".to_string()]);
    }

    #[test]
    fn test_parse_rejects_incomplete() {
        let err = parse_analysis(r#"{ "childAnalysis": {} }"#).unwrap_err();
        assert!(err.contains("structure"));
    }

    #[test]
    fn test_parse_accepts_loose_leaf_types() {
        let text = r#"{
            "childAnalysis": { "primaryEmotion": "Curious", "moodIndicators": ["wide eyes", "leaning in"] },
            "contentStrategy": { "emotionalNeed": ["exploration", "novelty"] },
            "queryRanking": {
                "bestMatch": "animal facts for kids",
                "rankedQueries": [{ "query": "animal facts for kids", "score": "90" }]
            }
        }"#;
        let analysis = parse_analysis(text).unwrap();
        let child = analysis.child_analysis.unwrap();
        assert_eq!(child.mood_indicators, "wide eyes, leaning in");
        assert_eq!(analysis.content_strategy.unwrap().emotional_need, "exploration, novelty");
        assert_eq!(analysis.query_ranking.unwrap().lead_score(), Some(90.0));
    }

    #[test]
    fn test_parse_rejects_non_object_section() {
        let text = r#"{ "childAnalysis": "happy", "contentStrategy": {}, "queryRanking": {} }"#;
        let err = parse_analysis(text).unwrap_err();
        assert!(err.contains("structure"));
    }

    #[test]
    fn test_parse_rejects_prose() {
        let err = parse_analysis("I cannot analyze this image.").unwrap_err();
        assert!(err.contains("invalid JSON"));
    }
}
