//! Common error types for the CEF dashboard

use thiserror::Error;

/// Common result type for CEF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding uploads or resolving configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Upload envelope is not a `<prefix>,<payload>` data URL
    #[error("Malformed upload envelope: {0}")]
    Envelope(String),

    /// Upload payload is not valid base64
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Spreadsheet could not be opened or read (wraps calamine::Error)
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    /// CSV could not be parsed (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook contains no worksheets
    #[error("Workbook contains no worksheets")]
    EmptyWorkbook,

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested block or participant not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True for errors caused by the uploaded file rather than the server
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::Envelope(_)
                | Error::Base64(_)
                | Error::Spreadsheet(_)
                | Error::Csv(_)
                | Error::EmptyWorkbook
        )
    }
}
