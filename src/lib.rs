//! pr-pilot - guided GitHub pull request authoring over MCP
//!
//! Exposes a small set of MCP tools that walk an AI agent through a
//! multi-step PR creation workflow: inspect the working branch, pick a base
//! branch, synthesize PR content from the git history, and finally create
//! the pull request through the GitHub API.
//!
//! The workflow itself is stateless: every invocation carries the state the
//! caller has accumulated so far (working directory, base branch, ticket,
//! confirmation flag) and the router decides which step runs next.

pub mod config;
pub mod error;
pub mod git;
pub mod platform;
pub mod server;
pub mod template;
pub mod types;
pub mod workflow;
