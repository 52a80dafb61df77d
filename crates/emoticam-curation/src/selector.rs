//! Query selection strategies.

use std::fmt;
use std::str::FromStr;

use emoticam_models::AnalysisResult;
use tracing::info;

use crate::fallback;

/// Picks the single phrase to run against the video platform.
///
/// Selection never fails: with nothing usable it degrades to
/// [`fallback::random_query`].
pub trait QuerySelector: Send + Sync {
    fn name(&self) -> &'static str;

    fn select(
        &self,
        analysis: Option<&AnalysisResult>,
        candidates: &[String],
        photo: Option<&str>,
    ) -> String;
}

/// Takes the first candidate phrase as-is.
///
/// The analysis and photo are accepted but not consulted, even though the
/// analysis carries a scored ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateSelector;

impl QuerySelector for FirstCandidateSelector {
    fn name(&self) -> &'static str {
        "first"
    }

    fn select(
        &self,
        _analysis: Option<&AnalysisResult>,
        candidates: &[String],
        _photo: Option<&str>,
    ) -> String {
        match candidates.first() {
            Some(phrase) if !phrase.is_empty() => phrase.clone(),
            _ => fallback::random_query().to_string(),
        }
    }
}

/// Uses the analysis ranking: `bestMatch`, then the highest score, then the
/// first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedQuerySelector;

impl QuerySelector for RankedQuerySelector {
    fn name(&self) -> &'static str {
        "ranked"
    }

    fn select(
        &self,
        analysis: Option<&AnalysisResult>,
        candidates: &[String],
        photo: Option<&str>,
    ) -> String {
        if let Some(ranking) = analysis.and_then(|a| a.query_ranking.as_ref()) {
            let best = ranking.best_match.trim();
            if !best.is_empty() {
                info!(query = %best, "Using ranked best match");
                return best.to_string();
            }
            if let Some(top) = ranking.top_scored() {
                info!(query = %top.query, score = ?top.score, "Using top scored query");
                return top.query.trim().to_string();
            }
        }

        FirstCandidateSelector.select(analysis, candidates, photo)
    }
}

/// Configured selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorKind {
    #[default]
    First,
    Ranked,
}

impl SelectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::First => "first",
            SelectorKind::Ranked => "ranked",
        }
    }

    pub fn build(&self) -> Box<dyn QuerySelector> {
        match self {
            SelectorKind::First => Box::new(FirstCandidateSelector),
            SelectorKind::Ranked => Box::new(RankedQuerySelector),
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query selector: {0}")]
pub struct SelectorParseError(String);

impl FromStr for SelectorKind {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(SelectorKind::First),
            "ranked" => Ok(SelectorKind::Ranked),
            _ => Err(SelectorParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoticam_models::{QueryRanking, RankedQuery};

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn ranked_analysis(best_match: &str) -> AnalysisResult {
        AnalysisResult {
            query_ranking: Some(QueryRanking {
                best_match: best_match.to_string(),
                reason: "fits".to_string(),
                ranked_queries: vec![
                    RankedQuery {
                        query: "kids dance movement videos".to_string(),
                        score: Some(90.0),
                        reasoning: String::new(),
                    },
                    RankedQuery {
                        query: "storytelling videos kids animated".to_string(),
                        score: Some(70.0),
                        reasoning: String::new(),
                    },
                ],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_selector_ignores_ranking() {
        let analysis = ranked_analysis("educational cartoons children safe");
        let chosen = FirstCandidateSelector.select(
            Some(&analysis),
            &phrases(&["dinosaur songs for kids", "other"]),
            Some("data:image/jpeg;base64,AAAA"),
        );
        assert_eq!(chosen, "dinosaur songs for kids");
    }

    #[test]
    fn test_first_selector_empty_uses_fallback_phrase() {
        let chosen = FirstCandidateSelector.select(None, &[], None);
        assert!(fallback::FALLBACK_QUERIES.contains(&chosen.as_str()));
    }

    #[test]
    fn test_ranked_selector_prefers_best_match() {
        let analysis = ranked_analysis("educational cartoons children safe");
        let chosen = RankedQuerySelector.select(Some(&analysis), &phrases(&["x"]), None);
        assert_eq!(chosen, "educational cartoons children safe");
    }

    #[test]
    fn test_ranked_selector_uses_top_score_without_best_match() {
        let analysis = ranked_analysis("  ");
        let chosen = RankedQuerySelector.select(Some(&analysis), &phrases(&["x"]), None);
        assert_eq!(chosen, "kids dance movement videos");
    }

    #[test]
    fn test_ranked_selector_without_analysis() {
        let chosen = RankedQuerySelector.select(None, &phrases(&["x", "y"]), None);
        assert_eq!(chosen, "x");
    }

    #[test]
    fn test_selector_kind_parse() {
        assert_eq!("ranked".parse::<SelectorKind>().unwrap(), SelectorKind::Ranked);
        assert_eq!(" First ".parse::<SelectorKind>().unwrap(), SelectorKind::First);
        assert!("best".parse::<SelectorKind>().is_err());
        assert_eq!(SelectorKind::Ranked.build().name(), "ranked");
    }
}
