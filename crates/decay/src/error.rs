//! Result and Error types for the decay module

/// Type alias for `Result<T, decay::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `nukmed-decay`
///
/// Numeric input never produces an error. Anything that can not be computed
/// is returned as a value (`0`, `None`, or
/// [TargetResult::NotComputable](crate::TargetResult::NotComputable)).
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure reading a half-life table
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Generic error type for nom parser results
    #[error("parser failed")]
    ParseError(String),

    /// Activity unit symbol is not one of MBq or mCi
    #[error("unknown activity unit \"{0}\" (expected MBq or mCi)")]
    UnknownUnit(String),

    /// Half-lives must be finite and positive
    #[error("invalid half-life of {value} h for \"{nuclide}\"")]
    InvalidHalfLife { nuclide: String, value: f64 },
}
