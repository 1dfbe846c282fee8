//! Process-wide workflow configuration
//!
//! Built once at startup from CLI flags and environment variables, then
//! passed by reference into every tool invocation. Never mutated afterward.

/// Immutable configuration shared by all tool invocations
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    /// Fallback working directory when a caller omits one
    pub default_working_dir: String,
    /// Base branch offered as the default choice (e.g. "develop")
    pub default_base_branch: String,
    /// Ticket prefix shown in prompts (e.g. "PROJ" for PROJ-1234)
    pub ticket_prefix: String,
    /// Optional path to a custom PR template file
    pub custom_template_path: Option<String>,
    /// GitHub token; `None` means PR creation is unavailable
    pub github_token: Option<String>,
}

impl WorkflowConfig {
    /// Whether a GitHub token is configured
    pub fn has_github_token(&self) -> bool {
        self.github_token.as_ref().is_some_and(|t| !t.is_empty())
    }
}
