//! Error types for video search backends.

use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

/// A live search against the video platform failed.
///
/// The pipeline recovers from every variant by advancing the fallback chain;
/// none of them reach the HTTP caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Video search request failed: {0}")]
    Transport(String),

    #[error("Video search returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode video search response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
