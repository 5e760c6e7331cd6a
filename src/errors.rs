use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single call against the quiz backend.
///
/// Every resource client surfaces exactly one of these three cases, so callers
/// can always tell "never reached the server" apart from "the server said no".
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, refused, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// A response arrived with a non-success status, or a success body that
    /// could not be decoded.
    #[error("Request failed with status {status}: {message}")]
    Backend {
        status: u16,
        body: Option<Value>,
        message: String,
    },

    /// A local failure: the request could not be built, or its outcome could
    /// not be recorded in the session.
    #[error("{message}")]
    Construction { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Backend,
    Construction,
}

impl ApiError {
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            message: format!("No response received from server: {}", cause),
        }
    }

    pub fn construction(message: impl Into<String>) -> Self {
        ApiError::Construction {
            message: message.into(),
        }
    }

    /// Builds a backend failure from a received status and body. The message
    /// comes from the body's `error` or `message` field when the backend sent
    /// one, otherwise from the status reason phrase.
    pub fn from_response(status: u16, body: Value) -> Self {
        let message = ["error", "message"]
            .iter()
            .find_map(|field| body.get(field).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Request failed".to_string());

        ApiError::Backend {
            status,
            body: if body.is_null() { None } else { Some(body) },
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport { .. } => ErrorKind::Transport,
            ApiError::Backend { .. } => ErrorKind::Backend,
            ApiError::Construction { .. } => ErrorKind::Construction,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Backend { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message }
            | ApiError::Backend { message, .. }
            | ApiError::Construction { message } => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::construction(format!("Could not build request: {}", err))
        } else {
            ApiError::transport(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::construction(format!("Could not serialize payload: {}", err))
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::construction(format!("Session not saved: {}", err))
    }
}

/// Failure to write the durable session file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
