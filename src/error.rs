use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("Release API error: {0}")]
    Api(String),
}

/// Convenience type alias for Results in autorelease
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a git error with context
    pub fn git(msg: impl Into<String>) -> Self {
        ReleaseError::Git(msg.into())
    }

    /// Create a hosting API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        ReleaseError::Api(msg.into())
    }
}

impl From<git2::Error> for ReleaseError {
    fn from(err: git2::Error) -> Self {
        ReleaseError::Git(err.message().to_string())
    }
}

impl From<reqwest::Error> for ReleaseError {
    fn from(err: reqwest::Error) -> Self {
        ReleaseError::Api(err.to_string())
    }
}
