//! Result and Error types for the catalog module

/// Type alias for `Result<T, catalog::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nukmed-catalog`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure during GET request for catalog data
    #[error("catalog request failed")]
    FailedRequest(#[from] minreq::Error),

    /// Non-success HTTP status for a catalog request
    #[error("catalog request returned HTTP {status} ({reason})")]
    HttpStatus { status: i32, reason: String },

    /// Failure to deserialise the catalog document
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Sort order not recognised
    #[error("unknown sort order \"{0}\" (expected alpha or half-life)")]
    UnknownSort(String),
}
