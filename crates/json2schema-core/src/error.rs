//! Error types for schema inference.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`crate::Converter`] and the file-loading helpers in
/// [`crate::io`].
///
/// Comparators never raise `ConvertError` for bad or absent evidence — per
/// the "discriminating, not validating" convention, a comparator that can't
/// make sense of a fragment simply declines (`(None, None)`). Only
/// configuration mistakes and broken invariants are fatal.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Raised eagerly from `Converter` construction when given an unknown
    /// union keyword or other malformed configuration.
    #[error("configuration error: {message}")]
    ConfigurationError { message: String },

    /// An invariant from the data model would be broken — e.g. a union
    /// variant ended up with an empty trigger set after partitioning.
    /// Fatal; aborts the run rather than returning partial output.
    #[error("internal invariant violated at {path}: {message}")]
    InternalInvariantViolation { path: String, message: String },

    /// Failed to read an example/schema document from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a document as JSON.
    #[error("failed to parse JSON{}: {source}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    JsonParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
}
