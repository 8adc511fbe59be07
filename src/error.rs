//! Error types.
//!
//! Only loading can fail: reading files, decoding the index blob, parsing
//! config. Querying never returns an error. A query that finds nothing is an
//! empty result, not a failure.

use std::path::PathBuf;

/// A specialized Result type for docsift operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The blob isn't valid base64.
    #[error("index blob is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The base64 payload isn't a valid brotli stream.
    #[error("failed to decompress index blob: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("failed to compress index blob: {0}")]
    Compress(#[source] std::io::Error),

    /// The decompressed payload isn't a valid catalog.
    #[error("invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no index for locale '{locale}' (available: {available})")]
    UnknownLocale { locale: String, available: String },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
