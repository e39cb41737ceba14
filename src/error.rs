//! Custom error types for gitlift
//!
//! A closed set of named error kinds, constructed at the component
//! boundaries. HTTP status codes are kept as diagnostic metadata on the
//! variants they produced.

use thiserror::Error;

/// Main error type for the gitlift application
#[derive(Error, Debug)]
pub enum GitliftError {
    /// The working directory is already a git repository
    #[error("Already a Git repository!")]
    AlreadyGitRepository,

    /// GitHub rejected the credentials or token (HTTP 401)
    #[error("Couldn't log you in. Please provide correct credentials/token.")]
    AuthenticationFailed { status: u16 },

    /// The account requires a one-time code for this request
    ///
    /// Signals the caller to collect a code and re-issue the mint request.
    #[error("A two-factor authentication code is required for this account.")]
    TwoFactorRequired,

    /// A repository or token with the same name already exists (HTTP 422)
    #[error("There is already a remote repository or token with the same name.")]
    ConflictExists { status: u16 },

    /// A git subprocess exited non-zero
    #[error("'{command}' failed:\n{stderr}")]
    SubprocessFailed { command: String, stderr: String },

    /// The credential store could not be read or written
    #[error("Cannot access the credential store: {0}")]
    StoreUnavailable(String),

    /// Unclassified GitHub API error
    #[error("GitHub API request failed: {0}")]
    GitHubApi(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check your internet connection.")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for GitliftError {
    fn from(err: toml::de::Error) -> Self {
        GitliftError::StoreUnavailable(err.to_string())
    }
}

impl From<toml::ser::Error> for GitliftError {
    fn from(err: toml::ser::Error) -> Self {
        GitliftError::StoreUnavailable(err.to_string())
    }
}

/// Result type alias using GitliftError
pub type Result<T> = std::result::Result<T, GitliftError>;
