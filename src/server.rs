//! MCP server surface
//!
//! Registers the workflow steps as MCP tools over the stdio transport. The
//! server owns the process-wide configuration and the external facades;
//! every tool call builds a fresh [`WorkflowContext`] and runs one step.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::WorkflowConfig;
use crate::git::{GitBackend, GitCli};
use crate::platform::{GitHubService, HostingService};
use crate::template::TemplateResolver;
use crate::types::Artifact;
use crate::workflow::{
    begin_workflow, confirm_and_create, generate_pr_content, route, select_base_branch,
    ConfirmInput, WorkflowContext, WorkflowInput,
};

// --- Tool parameter structs ---

#[derive(Debug, Deserialize, JsonSchema)]
struct SmartParams {
    /// Working directory of the git checkout
    working_dir: String,
    /// Base branch (e.g. develop, main) - optional
    base_branch: Option<String>,
    /// JIRA ticket id (e.g. PROJ-1234), or "없음" for no ticket - optional
    jira_ticket: Option<String>,
    /// When true, the caller pre-confirms PR creation (default: false)
    confirmed: Option<bool>,
    /// Additional free-text context - optional
    additional_context: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StartParams {
    /// Working directory of the git checkout
    working_dir: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SelectBaseParams {
    /// Working directory of the git checkout
    working_dir: String,
    /// Base branch chosen by the user
    base_branch: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GenerateParams {
    /// Working directory of the git checkout
    working_dir: String,
    /// Base branch selected in the previous step
    base_branch: String,
    /// JIRA ticket id (e.g. PROJ-1234), or "없음" for no ticket
    jira_ticket: String,
    /// Additional free-text context - optional
    additional_context: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ConfirmParams {
    /// Working directory of the git checkout
    working_dir: String,
    /// PR title from the generate step, carried forward unchanged
    title: String,
    /// PR body from the generate step, carried forward unchanged
    body: String,
    /// Base branch selected earlier in the workflow
    base_branch: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CurrentBranchParams {
    /// Working directory of the git checkout
    working_dir: String,
}

// --- MCP Server ---

/// MCP server for the guided PR authoring workflow
#[derive(Clone)]
pub struct PrPilotServer {
    config: Arc<WorkflowConfig>,
    git: GitCli,
    hosting: Option<Arc<GitHubService>>,
    templates: TemplateResolver,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PrPilotServer {
    /// Create a server from the process configuration
    pub fn new(config: WorkflowConfig) -> crate::error::Result<Self> {
        let hosting = match &config.github_token {
            Some(token) if !token.is_empty() => Some(Arc::new(GitHubService::new(token)?)),
            _ => None,
        };
        let templates = TemplateResolver::new(config.custom_template_path.clone());

        Ok(Self {
            config: Arc::new(config),
            git: GitCli::new(),
            hosting,
            templates,
            tool_router: Self::tool_router(),
        })
    }

    fn context(&self) -> WorkflowContext<'_> {
        WorkflowContext {
            config: &self.config,
            git: &self.git,
            hosting: self
                .hosting
                .as_deref()
                .map(|service| service as &dyn HostingService),
            templates: &self.templates,
        }
    }

    /// Smart entry point: routes to the right workflow step based on which
    /// parameters the caller supplied
    #[tool(
        description = "GitHub PR 생성 스마트 진입점. 제공된 정보량에 따라 자동 라우팅: \
                       파라미터 없음 → 단계별 워크플로우 시작, base_branch만 → 변경사항 분석, \
                       base_branch + jira_ticket → PR 내용 생성 후 확인 요청, \
                       confirmed=true → PR 내용 생성 후 즉시 create_pr_confirmed 호출 필요. \
                       이전 호출에서 받은 파라미터는 계속 전달하세요."
    )]
    async fn create_pr(
        &self,
        Parameters(params): Parameters<SmartParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = WorkflowInput {
            working_dir: params.working_dir,
            base_branch: params.base_branch,
            jira_ticket: params.jira_ticket,
            confirmed: params.confirmed.unwrap_or(false),
            additional_context: params.additional_context,
        };
        Ok(to_tool_result(route(&self.context(), &input).await))
    }

    /// Start the step-by-step PR workflow
    #[tool(
        description = "[STEP 1/4] PR 생성 워크플로우를 시작합니다. 현재 Git 상태를 확인하고 \
                       사용 가능한 base 브랜치 목록을 반환합니다."
    )]
    async fn start_pr_workflow(
        &self,
        Parameters(params): Parameters<StartParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(
            begin_workflow(&self.context(), &params.working_dir).await,
        ))
    }

    /// Select the base branch and analyze changes against it
    #[tool(
        description = "[STEP 2/4] 사용자가 선택한 base 브랜치를 설정하고 변경사항을 분석합니다. \
                       분석 후 JIRA 티켓 번호를 입력받도록 안내해주세요."
    )]
    async fn select_base_branch(
        &self,
        Parameters(params): Parameters<SelectBaseParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(
            select_base_branch(&self.context(), &params.working_dir, &params.base_branch).await,
        ))
    }

    /// Generate the PR title and body from the changeset
    #[tool(
        description = "[STEP 3/4] JIRA 티켓과 변경사항을 기반으로 PR 제목과 본문을 생성합니다. \
                       사용자가 확인하면 반드시 create_pr_confirmed 툴을 호출하세요. \
                       title, body, base_branch는 생성된 값을 그대로 전달해야 합니다."
    )]
    async fn generate_pr_content(
        &self,
        Parameters(params): Parameters<GenerateParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(to_tool_result(
            generate_pr_content(
                &self.context(),
                &params.working_dir,
                Some(&params.base_branch),
                Some(&params.jira_ticket),
                params.additional_context.as_deref(),
            )
            .await,
        ))
    }

    /// Push the head branch if needed and create the PR
    #[tool(
        description = "[STEP 4/4 - 최종] 사용자가 확인한 후 실제로 GitHub PR을 생성합니다. \
                       현재 브랜치를 push(미push 시), remote URL에서 owner/repo 추출, \
                       GitHub API로 PR 생성 후 URL을 반환합니다. 사용자가 명확히 확인한 \
                       경우에만 실행하세요."
    )]
    async fn create_pr_confirmed(
        &self,
        Parameters(params): Parameters<ConfirmParams>,
    ) -> Result<CallToolResult, McpError> {
        let input = ConfirmInput {
            working_dir: params.working_dir,
            title: params.title,
            body: params.body,
            base_branch: params.base_branch,
        };
        Ok(to_tool_result(
            confirm_and_create(&self.context(), &input).await,
        ))
    }

    /// Report the currently checked-out branch
    #[tool(
        description = "[유틸리티] 현재 Git 브랜치를 확인합니다. 단순 조회 툴이며 다음 단계가 \
                       자동으로 연결되지 않습니다."
    )]
    async fn get_current_branch(
        &self,
        Parameters(params): Parameters<CurrentBranchParams>,
    ) -> Result<CallToolResult, McpError> {
        let artifact = match self.git.current_branch(&params.working_dir).await {
            Ok(branch) => Artifact::success(format!("현재 브랜치: `{branch}`")),
            Err(e) => Artifact::error(format!("❌ Error: {e}")),
        };
        Ok(to_tool_result(artifact))
    }
}

#[tool_handler]
impl ServerHandler for PrPilotServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GitHub PR 생성을 대화형으로 안내하는 MCP 서버입니다. Git 변경사항 분석, \
                 PR 내용 생성, GitHub API 연동 기능을 제공합니다."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Convert a workflow artifact into an MCP tool result
fn to_tool_result(artifact: Artifact) -> CallToolResult {
    let content = vec![Content::text(artifact.text)];
    if artifact.is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}

/// Start the MCP server on the stdio transport
pub async fn serve(config: WorkflowConfig) -> anyhow::Result<()> {
    let server = PrPilotServer::new(config)?;
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
