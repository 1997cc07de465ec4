//! Result and Error types for the command line

/// Type alias for `Result<T, cli::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure reading a half-life table
    #[error("could not load half-lives")]
    Decay(#[from] nukmed_decay::Error),

    /// Failure reading or fetching the catalog
    #[error("could not load the catalog")]
    Catalog(#[from] nukmed_catalog::Error),

    /// Logger was already initialised
    #[error("could not set up logging")]
    Logger(#[from] log::SetLoggerError),
}
