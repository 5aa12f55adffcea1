//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Connection failure or transport error talking to a remote endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// A request did not complete within its deadline
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// A third-party API answered with a non-2xx status
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// A response body was missing the fields we expected
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required configuration value is missing
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Two entities in one list share the same id
    #[error("Duplicate entity id: {0}")]
    DuplicateEntity(String),

    /// An entity record failed validation
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PortfolioError {
    /// Whether this error came from talking to a remote service (as opposed to local state).
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            PortfolioError::Network(_)
                | PortfolioError::Timeout(_)
                | PortfolioError::Upstream { .. }
                | PortfolioError::Parse(_)
        )
    }
}

impl From<reqwest::Error> for PortfolioError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PortfolioError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            PortfolioError::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            PortfolioError::Network(err.to_string())
        }
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
