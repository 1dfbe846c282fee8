//! Git facade
//!
//! Typed operations over a local git checkout. The [`GitBackend`] trait
//! abstracts the git CLI so workflow steps can be tested against mocks;
//! [`GitCli`] is the real implementation shelling out to `git`.

use crate::error::{Error, Result};
use crate::types::RepositoryIdentity;
use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;

/// Git operations needed by the PR workflow
///
/// Each call is independent and blocking from the workflow's point of view;
/// results are never cached between invocations.
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// Name of the currently checked-out branch
    async fn current_branch(&self, dir: &str) -> Result<String>;

    /// Remote branch names on origin (without the `origin/` prefix)
    async fn remote_branches(&self, dir: &str) -> Result<Vec<String>>;

    /// Unified diff between `origin/<base>` and `<head>`
    async fn diff(&self, dir: &str, base: &str, head: &str) -> Result<String>;

    /// Changed file paths between `origin/<base>` and `<head>`, in diff order
    async fn changed_files(&self, dir: &str, base: &str, head: &str) -> Result<Vec<String>>;

    /// Commit subject lines between `origin/<base>` and `<head>`, newest first
    async fn commit_subjects(&self, dir: &str, base: &str, head: &str) -> Result<Vec<String>>;

    /// Number of commits between `origin/<base>` and `<head>`
    async fn commit_count(&self, dir: &str, base: &str, head: &str) -> Result<usize>;

    /// Push a branch to origin with upstream tracking (`-u origin <branch>`)
    async fn push(&self, dir: &str, branch: &str) -> Result<String>;

    /// Fetch a branch from origin
    async fn fetch(&self, dir: &str, branch: &str) -> Result<String>;

    /// Whether a branch exists on the origin remote
    async fn remote_branch_exists(&self, dir: &str, branch: &str) -> Result<bool>;

    /// Owner/repo identity parsed from the origin remote URL
    async fn repository_identity(&self, dir: &str) -> Result<RepositoryIdentity>;
}

/// Git backend shelling out to the `git` CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    /// Create a new CLI backend
    pub fn new() -> Self {
        Self
    }

    async fn run(dir: &str, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git {}: {e}", args.join(" "))))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::Git(format!(
                "git {} failed: {detail}",
                args.join(" ")
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn current_branch(&self, dir: &str) -> Result<String> {
        let branch = Self::run(dir, &["branch", "--show-current"]).await?;
        let branch = branch.trim().to_string();
        if branch.is_empty() {
            return Err(Error::Git("no current branch (detached HEAD?)".to_string()));
        }
        Ok(branch)
    }

    async fn remote_branches(&self, dir: &str) -> Result<Vec<String>> {
        let output = Self::run(dir, &["branch", "-r"]).await?;
        Ok(output
            .lines()
            .filter(|line| line.contains("origin/") && !line.contains("HEAD"))
            .map(|line| line.trim().trim_start_matches("origin/").to_string())
            .collect())
    }

    async fn diff(&self, dir: &str, base: &str, head: &str) -> Result<String> {
        Self::run(dir, &["diff", &format!("origin/{base}...{head}")]).await
    }

    async fn changed_files(&self, dir: &str, base: &str, head: &str) -> Result<Vec<String>> {
        let output = Self::run(
            dir,
            &["diff", "--name-only", &format!("origin/{base}...{head}")],
        )
        .await?;
        Ok(output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect())
    }

    async fn commit_subjects(&self, dir: &str, base: &str, head: &str) -> Result<Vec<String>> {
        let output = Self::run(
            dir,
            &["log", &format!("origin/{base}..{head}"), "--pretty=format:%s"],
        )
        .await?;
        Ok(output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect())
    }

    async fn commit_count(&self, dir: &str, base: &str, head: &str) -> Result<usize> {
        let output = Self::run(dir, &["rev-list", "--count", &format!("origin/{base}..{head}")])
            .await?;
        output
            .trim()
            .parse()
            .map_err(|e| Error::Parse(format!("invalid commit count: {e}")))
    }

    async fn push(&self, dir: &str, branch: &str) -> Result<String> {
        Self::run(dir, &["push", "-u", "origin", branch]).await
    }

    async fn fetch(&self, dir: &str, branch: &str) -> Result<String> {
        Self::run(dir, &["fetch", "origin", branch]).await
    }

    async fn remote_branch_exists(&self, dir: &str, branch: &str) -> Result<bool> {
        // ls-remote exits non-zero when the ref is missing; that's a normal
        // answer, not a failure.
        let output = Command::new("git")
            .args(["ls-remote", "--exit-code", "--heads", "origin", branch])
            .current_dir(dir)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git ls-remote: {e}")))?;
        Ok(output.status.success())
    }

    async fn repository_identity(&self, dir: &str) -> Result<RepositoryIdentity> {
        let remote_url = Self::run(dir, &["config", "--get", "remote.origin.url"]).await?;
        parse_repository_identity(remote_url.trim())
    }
}

/// Parse owner/repo from a GitHub remote URL
///
/// Accepts both SSH (`git@github.com:owner/repo.git`) and HTTPS
/// (`https://github.com/owner/repo.git`) forms.
pub fn parse_repository_identity(remote_url: &str) -> Result<RepositoryIdentity> {
    let re = Regex::new(r"github\.com[:/](.+?)/(.+?)(?:\.git)?$")
        .map_err(|e| Error::Parse(e.to_string()))?;

    let captures = re.captures(remote_url).ok_or_else(|| {
        Error::Parse(format!("cannot parse GitHub repository URL: {remote_url}"))
    })?;

    Ok(RepositoryIdentity {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
        remote_url: remote_url.to_string(),
    })
}
