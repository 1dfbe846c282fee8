//! Core types for pr-pilot

use serde::{Deserialize, Serialize};

/// A text result returned from a workflow step to the caller
///
/// Every step either fully completes and returns a success artifact, or
/// stops at the first failure and returns an error artifact. The `is_error`
/// flag is the only structured signal an automated caller gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Human-readable (markdown) step output
    pub text: String,
    /// Whether this artifact reports a failure
    pub is_error: bool,
}

impl Artifact {
    /// Create a success artifact
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Create an error artifact
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Snapshot of the differences between a base and head branch
///
/// Computed fresh on every invocation that needs it; never cached. File
/// order matches the underlying diff, commit subjects are newest first.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    /// Current (head) branch name
    pub current_branch: String,
    /// Changed file paths, in diff order
    pub changed_files: Vec<String>,
    /// Commit subject lines, newest first
    pub commits: Vec<String>,
    /// Commit count between base and head
    pub commit_count: usize,
    /// Raw unified diff text
    pub diff: String,
}

/// Repository identity parsed from the origin remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Raw remote URL the identity was parsed from
    pub remote_url: String,
}

/// A created pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// PR title
    pub title: String,
}
