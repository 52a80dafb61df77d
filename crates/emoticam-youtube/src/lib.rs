//! YouTube Data API search client.
//!
//! Runs one `search.list` request per phrase and turns the hits into
//! screened [`emoticam_models::VideoCandidate`]s. Hits failing the safety or
//! educational screen are dropped here, before the pipeline sees them.

pub mod client;
pub mod types;

pub use client::{YouTubeClient, DEFAULT_BASE_URL, PAGE_SIZE};
