//! Error types for Folio UI
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the crate
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Preference storage could not be read or written
    #[snafu(display("Storage error: {message}"))]
    Storage { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Malformed site or resource URL
    #[snafu(display("URL error: {source}"))]
    Url { source: url::ParseError },

    /// HTTP transport error (connection refused, bad status, undecodable body)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The email relay is not configured or could not be loaded
    #[snafu(display("Email relay unavailable: {message}"))]
    RelayUnavailable { message: String },

    /// The collaborator answered but refused the submission
    #[snafu(display("Submission rejected: {}", message.as_deref().unwrap_or("no reason given")))]
    Rejected { message: Option<String> },
}

impl Error {
    /// Server-supplied reason for a rejected submission, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<url::ParseError> for Error {
    fn from(source: url::ParseError) -> Self {
        Error::Url { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
