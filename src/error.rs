//! Error types for the CareLink CLI

use thiserror::Error;

/// Result type alias for CareLink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Resource client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response from the backend
    #[error("Request failed ({status}): {message}")]
    Request { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to the CareLink API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Authentication flow errors (login, signup, OTP, password reset)
#[derive(Debug, Error)]
pub enum AuthError {
    /// Backend rejected the credentials or payload; message comes from `detail`
    #[error("{0}")]
    Rejected(String),

    #[error("Not logged in. Run `carelink login` first.")]
    NotLoggedIn,

    #[error("No refresh token stored. Run `carelink login` again.")]
    MissingRefreshToken,
}

/// Configuration and local storage errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session file errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to save session file {path}: {reason}")]
    SaveFailed { path: String, reason: String },
}

/// Client-side validation failures, raised before any request is sent
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please enter a valid 6-digit code.")]
    InvalidOtp,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
