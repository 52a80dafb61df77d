//! Vision model client for child photo analysis.
//!
//! Sends one webcam photo to an OpenAI-compatible chat completions endpoint
//! and returns an [`emoticam_models::AnalysisResult`]. Transport and HTTP
//! failures are errors; unusable model output is not: it is replaced by a
//! canned analysis so the browser always has something to render.

pub mod canned;
pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;

pub use canned::canned_analysis;
pub use client::{AnalysisOutcome, AnalysisSource, ChildAnalyzer, VisionClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{VisionError, VisionResult};
pub use parse::{parse_analysis, strip_code_fences};
