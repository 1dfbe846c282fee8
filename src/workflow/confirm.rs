//! Step 4: confirm and create the PR
//!
//! Pushes the head branch when needed, resolves the repository identity
//! from the origin remote, and creates the pull request.

use crate::types::Artifact;
use crate::workflow::WorkflowContext;

/// Validated input for the confirm step
///
/// All fields are required; they carry the values produced by the earlier
/// steps unchanged.
#[derive(Debug, Clone)]
pub struct ConfirmInput {
    /// Working directory of the git checkout
    pub working_dir: String,
    /// PR title from the generate step
    pub title: String,
    /// PR body from the generate step
    pub body: String,
    /// Base branch selected earlier in the workflow
    pub base_branch: String,
}

/// Create the pull request after caller confirmation
///
/// Field validation short-circuits on the first missing value, in the order
/// title, body, base branch, working directory; no external call is made
/// before validation passes.
pub async fn confirm_and_create(ctx: &WorkflowContext<'_>, input: &ConfirmInput) -> Artifact {
    if input.title.is_empty() {
        return Artifact::error("❌ title이 필요합니다.");
    }
    if input.body.is_empty() {
        return Artifact::error("❌ body가 필요합니다.");
    }
    if input.base_branch.is_empty() {
        return Artifact::error("❌ base_branch가 필요합니다.");
    }
    if input.working_dir.is_empty() {
        return Artifact::error("❌ working_dir이 필요합니다.");
    }

    let Some(hosting) = ctx.hosting else {
        return Artifact::error("❌ GITHUB_TOKEN 환경변수가 설정되지 않았습니다.");
    };

    let Ok(head) = ctx.git.current_branch(&input.working_dir).await else {
        return Artifact::error("❌ 현재 브랜치를 확인할 수 없습니다.");
    };

    let branch_exists = ctx
        .git
        .remote_branch_exists(&input.working_dir, &head)
        .await
        .unwrap_or(false);
    if !branch_exists {
        if let Err(e) = ctx.git.push(&input.working_dir, &head).await {
            return Artifact::error(format!("❌ 브랜치 push 실패: {e}"));
        }
    }

    let identity = match ctx.git.repository_identity(&input.working_dir).await {
        Ok(identity) => identity,
        Err(e) => return Artifact::error(format!("❌ Repository 정보를 가져올 수 없습니다: {e}")),
    };

    match hosting
        .create_pull_request(
            &identity.owner,
            &identity.repo,
            &input.title,
            &input.body,
            &head,
            &input.base_branch,
        )
        .await
    {
        Ok(pr) => Artifact::success(format!(
            "✅ **PR이 성공적으로 생성되었습니다!**\n\n\
             🔗 **PR URL:** {}\n\
             📝 **PR #{}:** {}",
            pr.html_url, pr.number, pr.title
        )),
        Err(e) => Artifact::error(format!("❌ PR 생성 실패: {e}")),
    }
}
