// src/error.rs

use thiserror::Error;

/// Fatal ingestion failures. Either of these aborts startup; there is no
/// partial-success mode and no retry. Rows with missing fields are not
/// errors; the normalizer filters them silently.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source could not be reached or returned an unusable response
    /// (network failure, unreadable file, non-200 status).
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The source was reachable but its structure defeats the schema
    /// mapping (no qualifying table, required column out of range or
    /// missing).
    #[error("source format: {0}")]
    SourceFormat(String),
}

impl IngestError {
    pub fn fetch(msg: impl Into<String>) -> Self {
        IngestError::Fetch(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        IngestError::SourceFormat(msg.into())
    }
}
