//! Canned analysis served when the model output is unusable.

use emoticam_models::{
    AnalysisResult, ChildAnalysis, ContentStrategy, DevelopmentalBenefits, ParentalGuidance,
    QueryRanking, RankedQuery,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ranked(query: &str, score: f64, reasoning: &str) -> RankedQuery {
    RankedQuery {
        query: query.to_string(),
        score: Some(score),
        reasoning: reasoning.to_string(),
    }
}

/// Generic analysis for a curious preschooler with medium energy.
pub fn canned_analysis() -> AnalysisResult {
    AnalysisResult {
        child_analysis: Some(ChildAnalysis {
            age_estimate: "4-6 years".to_string(),
            primary_emotion: "Curious/Alert".to_string(),
            energy_level: "Medium".to_string(),
            developmental_stage: "Preschool".to_string(),
            mood_indicators: "Engaged and ready for learning activities".to_string(),
        }),
        content_strategy: Some(ContentStrategy {
            emotional_need: "Educational and entertaining content".to_string(),
            learning_opportunity: "Interactive learning and creative expression".to_string(),
            energy_match: "Moderate activity level content".to_string(),
            attention_span: "Short to medium format (10-15 minutes)".to_string(),
        }),
        youtube_kids_queries: strings(&[
            "learning songs children safe",
            "kids crafts activities simple",
            "animated stories children educational",
            "counting colors shapes kids",
        ]),
        google_safe_queries: strings(&[
            "kid-friendly educational content 4-6 years",
            "safe preschool learning activities",
            "age-appropriate children videos",
            "educational games kids supervised",
            "family-friendly kids entertainment",
        ]),
        query_ranking: Some(QueryRanking {
            best_match: "educational videos preschool kids".to_string(),
            reason: "Well-balanced educational content suitable for curious preschooler with medium energy".to_string(),
            ranked_queries: vec![
                ranked("learning songs children safe", 85.0, "Good for medium energy with educational value through music"),
                ranked("counting colors shapes kids", 80.0, "Age-appropriate learning fundamentals for preschoolers"),
                ranked("kids crafts activities simple", 75.0, "Creative but may require supervision for this age group"),
                ranked("animated stories children educational", 70.0, "Good for attention span but less interactive"),
            ],
        }),
        parental_guidance: Some(ParentalGuidance {
            suggested_duration: "15-20 minutes".to_string(),
            supervision_level: "Guided supervision".to_string(),
            co_viewing_opportunities: "Engage with learning content together".to_string(),
            discussion_points: "Discuss what they learned and enjoyed".to_string(),
            follow_up_activities: "Practice counting, colors, or creative activities".to_string(),
        }),
        developmental_benefits: Some(DevelopmentalBenefits {
            emotional_development: "Supports emotional growth and expression".to_string(),
            cognitive_skills: "Enhances learning and cognitive development".to_string(),
            social_skills: "Promotes social interaction and communication".to_string(),
            creative_expression: "Encourages creativity and imagination".to_string(),
        }),
        safety_assurance: strings(&[
            "Age-appropriate content only",
            "No inappropriate themes or language",
            "Educational value included",
            "Positive role models featured",
            "Parent supervision recommended",
            "Safe platform recommendations",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_is_complete() {
        let analysis = canned_analysis();
        assert!(analysis.is_complete());
        assert_eq!(analysis.youtube_kids_queries.len(), 4);
        assert_eq!(analysis.query_ranking.unwrap().lead_score(), Some(85.0));
    }
}
