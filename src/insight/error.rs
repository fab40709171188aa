//! Error types for insight requests

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while requesting an insight
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("No API key configured (set GEMINI_API_KEY or api_key in config.json)")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Response contained no text")]
    EmptyResponse,
}

/// Result type alias for insight operations
pub type InsightResult<T> = Result<T, InsightError>;
