//! Workflow input
//!
//! The sparse, caller-supplied state that fully determines routing. Fields
//! the caller omitted are `None`; an explicitly empty ticket is distinct
//! from an absent one.

/// Caller-supplied state for one workflow invocation
#[derive(Debug, Clone, Default)]
pub struct WorkflowInput {
    /// Working directory of the git checkout (required)
    pub working_dir: String,
    /// Chosen base branch, if the caller has picked one
    pub base_branch: Option<String>,
    /// Ticket id, or the `없음` sentinel for "no ticket"
    pub jira_ticket: Option<String>,
    /// Whether the caller pre-confirmed PR creation
    pub confirmed: bool,
    /// Free-text context forwarded into content generation
    pub additional_context: Option<String>,
}

impl WorkflowInput {
    /// Create an input carrying only the working directory
    pub fn new(working_dir: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            ..Self::default()
        }
    }
}
