//! Error types for wavotes
//!
//! This module defines the error types used throughout the wavotes crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use wavotes_core::error::{WavotesError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to WavotesError
//!     let _file = std::fs::read_to_string("nonexistent.csv")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for wavotes operations
///
/// This enum covers every way retrieving or interpreting a data resource
/// can fail, from IO errors to HTTP status failures.
#[derive(Error, Debug)]
pub enum WavotesError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with a success status
    #[error("HTTP {status} while fetching {name}")]
    HttpStatus {
        /// Resource that was requested
        name: String,
        /// Status code returned by the server
        status: u16,
    },

    /// A named resource does not exist in the source
    #[error("Resource not found: {0}")]
    MissingResource(String),

    /// A base URL or resource name could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lookup for a resolution or nation came back empty
    #[error("Not found: {0}")]
    NotFound(String),

    /// Loading the resolution and vote tables failed
    #[error(transparent)]
    DataLoad(Box<DataLoadError>),
}

/// Failure of the top-level load of both CSV resources
///
/// Callers only learn that loading failed; the underlying cause is kept
/// as the error source so it can be logged or inspected.
#[derive(Error, Debug)]
#[error("failed to load core data")]
pub struct DataLoadError {
    #[source]
    cause: WavotesError,
}

impl DataLoadError {
    /// Wrap the error that aborted the load
    pub fn new(cause: WavotesError) -> Self {
        Self { cause }
    }

    /// The error that aborted the load
    pub fn cause(&self) -> &WavotesError {
        &self.cause
    }
}

impl From<DataLoadError> for WavotesError {
    fn from(err: DataLoadError) -> Self {
        WavotesError::DataLoad(Box::new(err))
    }
}

impl From<WavotesError> for DataLoadError {
    fn from(cause: WavotesError) -> Self {
        Self::new(cause)
    }
}

/// Convenience type alias for Results in wavotes
///
/// # Example
///
/// ```
/// use wavotes_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, WavotesError>;
