//! Shared test utilities

#![allow(dead_code)]

mod mock_git;
mod mock_hosting;

pub use mock_git::MockGitBackend;
pub use mock_hosting::{CreatePrCall, MockHostingService};

use pr_pilot::config::WorkflowConfig;

/// Configuration used across workflow tests
pub fn test_config() -> WorkflowConfig {
    WorkflowConfig {
        default_working_dir: "/repo".to_string(),
        default_base_branch: "develop".to_string(),
        ticket_prefix: "PROJ".to_string(),
        custom_template_path: None,
        github_token: Some("ghp_test".to_string()),
    }
}
