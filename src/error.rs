use std::result;

use thiserror::Error;

/// Error types for PubMed search and fetch operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing error with detailed message
    #[error("XML parsing error: {message}")]
    XmlParseError { message: String },

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Date could not be read as `YYYY/MM`
    #[error("Invalid date: {value} (expected YYYY/MM)")]
    InvalidDate { value: String },

    /// Input table could not be read
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Whether the remote service answered with a non-success HTTP status.
    ///
    /// Record fetches treat this class of failure as "no data for this
    /// record" instead of aborting the run. Transport and decoding failures
    /// are not included.
    pub fn is_http_status_error(&self) -> bool {
        match self {
            PubMedError::ApiError { status, .. } => !(200..300).contains(status),
            PubMedError::RequestError(err) => err.status().is_some_and(|s| !s.is_success()),
            _ => false,
        }
    }

    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        PubMedError::ApiError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }
}

impl From<std::io::Error> for PubMedError {
    fn from(err: std::io::Error) -> Self {
        PubMedError::IoError {
            message: err.to_string(),
        }
    }
}
