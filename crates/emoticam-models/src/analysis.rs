//! Child analysis models.
//!
//! The vision model returns one [`AnalysisResult`] per photo. The browser
//! echoes it back when requesting videos, so every section is optional and
//! every leaf defaults to empty: partial documents still deserialize.
//! Leaves go through [`crate::lenient`], so a list where text was expected
//! or a quoted score does not reject the document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lenient;

/// Full analysis document for one captured photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Estimated state of the child
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub child_analysis: Option<ChildAnalysis>,

    /// Hints for what kind of content fits that state
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_strategy: Option<ContentStrategy>,

    /// Candidate phrases for a kids video platform
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub youtube_kids_queries: Vec<String>,

    /// Candidate phrases for a general safe-search engine
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub google_safe_queries: Vec<String>,

    /// Scored ranking of the candidate phrases
    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub query_ranking: Option<QueryRanking>,

    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub parental_guidance: Option<ParentalGuidance>,

    #[serde(
        default,
        deserialize_with = "lenient::section",
        skip_serializing_if = "Option::is_none"
    )]
    pub developmental_benefits: Option<DevelopmentalBenefits>,

    /// Safety statements shown to the parent
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub safety_assurance: Vec<String>,
}

impl AnalysisResult {
    /// Whether the sections the UI cannot render without are all present.
    pub fn is_complete(&self) -> bool {
        self.child_analysis.is_some()
            && self.content_strategy.is_some()
            && self.query_ranking.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildAnalysis {
    #[serde(deserialize_with = "lenient::text")]
    pub age_estimate: String,
    #[serde(deserialize_with = "lenient::text")]
    pub primary_emotion: String,
    #[serde(deserialize_with = "lenient::text")]
    pub energy_level: String,
    #[serde(deserialize_with = "lenient::text")]
    pub developmental_stage: String,
    #[serde(deserialize_with = "lenient::text")]
    pub mood_indicators: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentStrategy {
    #[serde(deserialize_with = "lenient::text")]
    pub emotional_need: String,
    #[serde(deserialize_with = "lenient::text")]
    pub learning_opportunity: String,
    #[serde(deserialize_with = "lenient::text")]
    pub energy_match: String,
    #[serde(deserialize_with = "lenient::text")]
    pub attention_span: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentalGuidance {
    #[serde(deserialize_with = "lenient::text")]
    pub suggested_duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub supervision_level: String,
    #[serde(deserialize_with = "lenient::text")]
    pub co_viewing_opportunities: String,
    #[serde(deserialize_with = "lenient::text")]
    pub discussion_points: String,
    #[serde(deserialize_with = "lenient::text")]
    pub follow_up_activities: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DevelopmentalBenefits {
    #[serde(deserialize_with = "lenient::text")]
    pub emotional_development: String,
    #[serde(deserialize_with = "lenient::text")]
    pub cognitive_skills: String,
    #[serde(deserialize_with = "lenient::text")]
    pub social_skills: String,
    #[serde(deserialize_with = "lenient::text")]
    pub creative_expression: String,
}

/// Ranking of candidate phrases computed by the vision model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRanking {
    /// Phrase the model considers the best fit
    #[serde(deserialize_with = "lenient::text")]
    pub best_match: String,

    /// Free-text justification for `best_match`
    #[serde(deserialize_with = "lenient::text")]
    pub reason: String,

    /// Phrases in the model's order (not necessarily sorted by score)
    #[serde(deserialize_with = "lenient::record_list")]
    pub ranked_queries: Vec<RankedQuery>,
}

impl QueryRanking {
    /// Score of the first ranked entry, as shown in provenance notes.
    pub fn lead_score(&self) -> Option<f64> {
        self.ranked_queries.first().and_then(|q| q.score)
    }

    /// Entry with the highest score. Ties keep the earlier entry.
    pub fn top_scored(&self) -> Option<&RankedQuery> {
        self.ranked_queries
            .iter()
            .filter(|q| q.score.is_some() && !q.query.trim().is_empty())
            .fold(None, |best: Option<&RankedQuery>, q| match best {
                Some(b) if b.score >= q.score => Some(b),
                _ => Some(q),
            })
    }
}

/// One scored phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedQuery {
    #[serde(deserialize_with = "lenient::text")]
    pub query: String,

    /// Score in 0..=100
    #[serde(
        deserialize_with = "lenient::score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,

    #[serde(deserialize_with = "lenient::text")]
    pub reasoning: String,
}

impl From<String> for RankedQuery {
    fn from(query: String) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }
}
