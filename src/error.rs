//! PasteFlow Error Types
//!
//! Central error type for provider calls and the hook pipeline.

use thiserror::Error;

/// Central error type for PasteFlow
#[derive(Error, Debug)]
pub enum HookError {
    /// The endpoint could not be reached, or the connection dropped
    #[error("Network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status; the raw body is
    /// kept for diagnostics
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The call succeeded but no extractable text was found
    #[error("No text returned from provider.")]
    EmptyResponse,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PasteFlow operations
pub type HookResult<T> = Result<T, HookError>;
