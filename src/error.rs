//! Error handling for domain-scout

use thiserror::Error;

/// Main error type for domain-scout
#[derive(Error, Debug, Clone)]
pub enum DomainScoutError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainScoutError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code of the failed API call, if this error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Network { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for DomainScoutError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_request() {
            Self::network("Request failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for DomainScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainScoutError>;
