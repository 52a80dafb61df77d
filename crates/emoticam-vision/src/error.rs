//! Vision client error types.

use thiserror::Error;

pub type VisionResult<T> = Result<T, VisionError>;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Vision request failed: {0}")]
    Request(String),

    #[error("Vision model returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode vision response envelope: {0}")]
    Decode(String),
}

impl VisionError {
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
