//! Mock hosting service for testing

#![allow(dead_code)]

use async_trait::async_trait;
use pr_pilot::error::{Error, Result};
use pr_pilot::platform::HostingService;
use pr_pilot::types::PullRequest;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Call record for `create_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
}

/// Mock hosting service with call tracking and error injection
pub struct MockHostingService {
    next_pr_number: AtomicU64,
    create_calls: Mutex<Vec<CreatePrCall>>,
    error_on_create: Mutex<Option<String>>,
}

impl Default for MockHostingService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHostingService {
    /// Create a mock that assigns PR numbers starting at 1
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            create_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
        }
    }

    /// Make `create_pull_request` fail with the given message
    pub fn fail_create(self, message: &str) -> Self {
        *self.error_on_create.lock().unwrap() = Some(message.to_string());
        self
    }

    /// All recorded create calls, in order
    pub fn create_calls(&self) -> Vec<CreatePrCall> {
        self.create_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
        head: &str,
        base: &str,
    ) -> Result<PullRequest> {
        self.create_calls.lock().unwrap().push(CreatePrCall {
            owner: owner.to_string(),
            repo: repo.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            head: head.to_string(),
            base: base.to_string(),
        });

        if let Some(message) = self.error_on_create.lock().unwrap().clone() {
            return Err(Error::GitHubApi(message));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/{owner}/{repo}/pull/{number}"),
            title: title.to_string(),
        })
    }
}
