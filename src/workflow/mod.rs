//! PR authoring workflow
//!
//! The four workflow steps and the smart router that dispatches between
//! them based on which fields the caller supplied:
//! 1. Begin - inspect the current branch and offer base candidates
//! 2. Select base - verify the base branch and analyze the changes
//! 3. Generate - synthesize PR title and body from the changeset
//! 4. Confirm - push if needed and create the PR through the hosting API
//!
//! Every step is stateless; all workflow state travels in [`WorkflowInput`].

mod begin;
mod confirm;
pub mod content;
mod generate;
mod input;
mod router;
mod select_base;

pub use begin::begin_workflow;
pub use confirm::{confirm_and_create, ConfirmInput};
pub use generate::generate_pr_content;
pub use input::WorkflowInput;
pub use router::route;
pub use select_base::select_base_branch;

use crate::config::WorkflowConfig;
use crate::error::Result;
use crate::git::GitBackend;
use crate::platform::HostingService;
use crate::template::TemplateResolver;
use crate::types::ChangeSet;

/// Shared collaborators for workflow steps
///
/// Holds the process-wide configuration and the external facades. Read-only
/// for the lifetime of the process; cloned references are handed to each
/// invocation.
pub struct WorkflowContext<'a> {
    /// Process-wide configuration
    pub config: &'a WorkflowConfig,
    /// VCS facade
    pub git: &'a dyn GitBackend,
    /// Hosting API facade; `None` when no token is configured
    pub hosting: Option<&'a dyn HostingService>,
    /// PR template resolver
    pub templates: &'a TemplateResolver,
}

impl WorkflowContext<'_> {
    /// Compute a fresh changeset for (base, head) in the given directory
    ///
    /// Fails on the first git operation that fails; nothing is cached.
    pub(crate) async fn changeset(&self, dir: &str, base: &str, head: &str) -> Result<ChangeSet> {
        let changed_files = self.git.changed_files(dir, base, head).await?;
        let commits = self.git.commit_subjects(dir, base, head).await?;
        let commit_count = self.git.commit_count(dir, base, head).await?;
        let diff = self.git.diff(dir, base, head).await?;

        Ok(ChangeSet {
            current_branch: head.to_string(),
            changed_files,
            commits,
            commit_count,
            diff,
        })
    }
}
