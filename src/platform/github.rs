//! GitHub hosting service implementation

use crate::error::{Error, Result};
use crate::platform::HostingService;
use crate::types::PullRequest;
use async_trait::async_trait;
use octocrab::Octocrab;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service from a personal access token
    pub fn new(token: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HostingService for GitHubService {
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(owner, repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }
}
