//! Shared data models for the Emoticam backend.
//!
//! This crate provides Serde-serializable types for:
//! - Child analysis results produced by the vision model
//! - Video candidates surfaced by the curation pipeline
//! - Search response payloads returned to the browser

pub mod analysis;
pub mod lenient;
pub mod payload;
pub mod video;

// Re-export common types
pub use analysis::{
    AnalysisResult, ChildAnalysis, ContentStrategy, DevelopmentalBenefits, ParentalGuidance,
    QueryRanking, RankedQuery,
};
pub use payload::{ResultPayload, MAX_RESULT_VIDEOS};
pub use video::{SafetyRating, VideoCandidate, VideoCategory};
