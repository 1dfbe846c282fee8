//! pr-pilot - guided GitHub PR authoring over MCP
//!
//! Binary entry point: parses configuration from flags/environment, sets up
//! logging on stderr (stdout belongs to the MCP transport), and serves.

use anyhow::Result;
use clap::Parser;
use pr_pilot::config::WorkflowConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pr-pilot")]
#[command(about = "MCP server for guided GitHub pull request authoring")]
#[command(version)]
struct Cli {
    /// GitHub token for PR creation (without it, creation is unavailable)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Default working directory when a caller omits one
    #[arg(long, env = "WORKING_DIR")]
    working_dir: Option<String>,

    /// Default base branch offered in prompts
    #[arg(long, env = "PR_BASE_BRANCH", default_value = "develop")]
    base_branch: String,

    /// Ticket prefix shown in prompts (e.g. PROJ for PROJ-1234)
    #[arg(long, env = "PR_JIRA_PREFIX", default_value = "PROJ")]
    jira_prefix: String,

    /// Custom PR template path, tried after the repository's own templates
    #[arg(long, env = "PR_TEMPLATE_PATH")]
    template_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let default_working_dir = match cli.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?.to_string_lossy().into_owned(),
    };

    let config = WorkflowConfig {
        default_working_dir,
        default_base_branch: cli.base_branch,
        ticket_prefix: cli.jira_prefix,
        custom_template_path: cli.template_path,
        github_token: cli.github_token,
    };

    tracing::info!("starting pr-pilot MCP server");
    tracing::info!("default working dir: {}", config.default_working_dir);
    tracing::info!("default base branch: {}", config.default_base_branch);
    tracing::info!(
        "GitHub token: {}",
        if config.has_github_token() {
            "configured"
        } else {
            "not configured (PR creation unavailable)"
        }
    );

    pr_pilot::server::serve(config).await
}
