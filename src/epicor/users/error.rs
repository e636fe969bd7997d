use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads employee files and pushes them to the ERP.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Wrapper for IO failures such as opening an employee file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON parsing or serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors bubbled up from the CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a row does not carry exactly a first and a last name.
    #[error("malformed record at {path}:{line}: expected 2 fields, found {fields}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        fields: usize,
    },

    /// Raised when an employee has no first name to take an initial from.
    #[error("cannot derive a user ID for '{last_name}': first name is empty")]
    EmptyFirstName { last_name: String },

    /// Raised when a verb other than create or update reaches the client.
    #[error("invalid HTTP method '{0}'; supported methods are POST and PATCH")]
    InvalidMethod(String),

    /// Raised when the ERP answers with a non-success status.
    #[error("{method} {url} failed with status {status}: {body}")]
    Http {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    /// Network level failures reported by the HTTP client.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Raised when a `.env` file exists but cannot be parsed.
    #[error("failed to load environment file: {0}")]
    Dotenv(#[from] dotenvy::Error),

    /// Raised when a required environment variable is unset or empty.
    #[error("missing configuration: environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
