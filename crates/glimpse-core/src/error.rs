//! Error types for the Glimpse application.

use thiserror::Error;

/// A shared error type for the entire Glimpse application.
///
/// The variants mirror the failure taxonomy of the API boundary:
/// transport failures, non-success HTTP statuses, and undecodable
/// payloads. Call sites that deliberately fail soft collapse any of
/// these into an empty value after logging.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlimpseError {
    /// Network/transport failure (connection refused, DNS, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Non-success HTTP status returned by the server
    #[error("Server returned status {status}")]
    Status { status: u16 },

    /// Response body could not be decoded into the expected shape
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// IO error (terminal and chart-surface operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GlimpseError {
    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Status error
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check if this is a Status error
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<std::io::Error> for GlimpseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<reqwest::Error> for GlimpseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for GlimpseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, GlimpseError>`.
pub type Result<T> = std::result::Result<T, GlimpseError>;
