//! Error types for pr-pilot

use thiserror::Error;

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pr-pilot
#[derive(Debug, Error)]
pub enum Error {
    /// A git command failed or produced unusable output
    #[error("git error: {0}")]
    Git(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Failed to parse a remote URL or command output
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}
