//! Mock git backend for testing
//!
//! Manually implements `GitBackend` with configurable responses, call
//! tracking, and error injection, so workflow steps can be driven without a
//! real repository.

#![allow(dead_code)]

use async_trait::async_trait;
use pr_pilot::error::{Error, Result};
use pr_pilot::git::{parse_repository_identity, GitBackend};
use pr_pilot::types::RepositoryIdentity;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock git backend with configurable state
pub struct MockGitBackend {
    current_branch: Option<String>,
    remote_branches: Vec<String>,
    remote_exists: HashMap<String, bool>,
    changed_files: Vec<String>,
    commits: Vec<String>,
    diff: String,
    remote_url: String,
    push_error: Option<String>,
    fetch_error: Option<String>,
    // Call tracking
    calls: Mutex<Vec<String>>,
    push_calls: Mutex<Vec<String>>,
    fetch_calls: Mutex<Vec<String>>,
}

impl Default for MockGitBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGitBackend {
    /// Create a mock for a repository on branch `feature/x` with no changes
    pub fn new() -> Self {
        Self {
            current_branch: Some("feature/x".to_string()),
            remote_branches: vec!["develop".to_string(), "main".to_string()],
            remote_exists: HashMap::new(),
            changed_files: Vec::new(),
            commits: Vec::new(),
            diff: String::new(),
            remote_url: "https://github.com/yunhalee/pr-pilot.git".to_string(),
            push_error: None,
            fetch_error: None,
            calls: Mutex::new(Vec::new()),
            push_calls: Mutex::new(Vec::new()),
            fetch_calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the current branch; `None` simulates "not a repository"
    pub fn with_current_branch(mut self, branch: Option<&str>) -> Self {
        self.current_branch = branch.map(ToString::to_string);
        self
    }

    /// Set the remote branch list
    pub fn with_remote_branches(mut self, branches: &[&str]) -> Self {
        self.remote_branches = branches.iter().map(ToString::to_string).collect();
        self
    }

    /// Mark a branch as existing (or not) on the remote
    pub fn with_remote_branch(mut self, branch: &str, exists: bool) -> Self {
        self.remote_exists.insert(branch.to_string(), exists);
        self
    }

    /// Set the changed file list
    pub fn with_changed_files(mut self, files: &[&str]) -> Self {
        self.changed_files = files.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the commit subjects (newest first)
    pub fn with_commits(mut self, commits: &[&str]) -> Self {
        self.commits = commits.iter().map(ToString::to_string).collect();
        self
    }

    /// Set the raw diff text
    pub fn with_diff(mut self, diff: &str) -> Self {
        self.diff = diff.to_string();
        self
    }

    /// Set the origin remote URL
    pub fn with_remote_url(mut self, url: &str) -> Self {
        self.remote_url = url.to_string();
        self
    }

    /// Make pushes fail with the given message
    pub fn with_push_error(mut self, message: &str) -> Self {
        self.push_error = Some(message.to_string());
        self
    }

    /// Make fetches fail with the given message
    pub fn with_fetch_error(mut self, message: &str) -> Self {
        self.fetch_error = Some(message.to_string());
        self
    }

    /// Names of all git operations invoked, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Branches pushed, in order
    pub fn push_calls(&self) -> Vec<String> {
        self.push_calls.lock().unwrap().clone()
    }

    /// Branches fetched, in order
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.lock().unwrap().clone()
    }

    fn record(&self, op: &str) {
        self.calls.lock().unwrap().push(op.to_string());
    }
}

#[async_trait]
impl GitBackend for MockGitBackend {
    async fn current_branch(&self, _dir: &str) -> Result<String> {
        self.record("current_branch");
        self.current_branch
            .clone()
            .ok_or_else(|| Error::Git("not a git repository".to_string()))
    }

    async fn remote_branches(&self, _dir: &str) -> Result<Vec<String>> {
        self.record("remote_branches");
        Ok(self.remote_branches.clone())
    }

    async fn diff(&self, _dir: &str, _base: &str, _head: &str) -> Result<String> {
        self.record("diff");
        Ok(self.diff.clone())
    }

    async fn changed_files(&self, _dir: &str, _base: &str, _head: &str) -> Result<Vec<String>> {
        self.record("changed_files");
        Ok(self.changed_files.clone())
    }

    async fn commit_subjects(&self, _dir: &str, _base: &str, _head: &str) -> Result<Vec<String>> {
        self.record("commit_subjects");
        Ok(self.commits.clone())
    }

    async fn commit_count(&self, _dir: &str, _base: &str, _head: &str) -> Result<usize> {
        self.record("commit_count");
        Ok(self.commits.len())
    }

    async fn push(&self, _dir: &str, branch: &str) -> Result<String> {
        self.record("push");
        self.push_calls.lock().unwrap().push(branch.to_string());
        match &self.push_error {
            Some(message) => Err(Error::Git(message.clone())),
            None => Ok(String::new()),
        }
    }

    async fn fetch(&self, _dir: &str, branch: &str) -> Result<String> {
        self.record("fetch");
        self.fetch_calls.lock().unwrap().push(branch.to_string());
        match &self.fetch_error {
            Some(message) => Err(Error::Git(message.clone())),
            None => Ok(String::new()),
        }
    }

    async fn remote_branch_exists(&self, _dir: &str, branch: &str) -> Result<bool> {
        self.record("remote_branch_exists");
        Ok(self.remote_exists.get(branch).copied().unwrap_or(false))
    }

    async fn repository_identity(&self, _dir: &str) -> Result<RepositoryIdentity> {
        self.record("repository_identity");
        parse_repository_identity(&self.remote_url)
    }
}
