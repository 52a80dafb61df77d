//! Child-safe video selection pipeline.
//!
//! The pipeline turns an analysis result into a bounded, deduplicated list
//! of educational videos:
//!
//! 1. a [`QuerySelector`] picks one phrase,
//! 2. a [`VideoSearch`] backend fetches and screens candidates,
//! 3. the [`fallback`] chain fills in when nothing survives,
//! 4. the [`assembler`] dedupes, sorts, truncates and adds provenance.
//!
//! Keyword tables and curated records are immutable statics; every service
//! here is stateless.

pub mod assembler;
pub mod category;
pub mod error;
pub mod fallback;
pub mod filters;
pub mod pipeline;
pub mod search;
pub mod selector;
pub mod text;
pub mod thumbnail;

pub use assembler::{assemble, dedupe_by_url};
pub use category::categorize;
pub use error::{FetchError, FetchResult};
pub use filters::{is_educational, is_safe};
pub use pipeline::{DeliveryTier, PipelineOutcome, SearchInput, VideoPipeline};
pub use search::VideoSearch;
pub use selector::{FirstCandidateSelector, QuerySelector, RankedQuerySelector, SelectorKind};
pub use text::{clean_text, screening_text};
pub use thumbnail::synthesize_thumbnail;
