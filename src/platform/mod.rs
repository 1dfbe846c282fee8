//! Hosting platform services
//!
//! Abstracts the repository hosting API so the confirm step can be tested
//! without network access.

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::PullRequest;
use async_trait::async_trait;

/// Hosting API operations needed by the PR workflow
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Create a pull request
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> Result<PullRequest>;
}
