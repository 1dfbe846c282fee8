//! Step 2: select the base branch and analyze changes
//!
//! Verifies the chosen base branch exists remotely, computes the changeset
//! against it, and prompts for a ticket id.

use crate::types::Artifact;
use crate::workflow::content::group_by_extension;
use crate::workflow::WorkflowContext;
use std::fmt::Write;

/// Maximum remote branches suggested when the chosen base is missing
const BRANCH_SUGGESTION_MAX: usize = 10;

/// Maximum file names previewed per extension group
const GROUP_PREVIEW_MAX: usize = 3;

/// Maximum commit subjects listed in the summary
const COMMIT_LIST_MAX: usize = 10;

/// Set the base branch, analyze the changes against it, and ask for a ticket
pub async fn select_base_branch(
    ctx: &WorkflowContext<'_>,
    working_dir: &str,
    base_branch: &str,
) -> Artifact {
    let exists = ctx
        .git
        .remote_branch_exists(working_dir, base_branch)
        .await
        .unwrap_or(false);
    if !exists {
        let branches = ctx.git.remote_branches(working_dir).await.unwrap_or_default();
        let suggestions = branches
            .iter()
            .take(BRANCH_SUGGESTION_MAX)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        return Artifact::error(format!(
            "❌ `{base_branch}` 브랜치가 존재하지 않습니다.\n사용 가능한 브랜치: {suggestions}"
        ));
    }

    // Best effort: a failed fetch just means we compare against the last
    // known state of the base branch.
    if let Err(e) = ctx.git.fetch(working_dir, base_branch).await {
        tracing::warn!("fetch of {base_branch} failed: {e}");
    }

    let Ok(current_branch) = ctx.git.current_branch(working_dir).await else {
        return Artifact::error("❌ 현재 브랜치를 확인할 수 없습니다.");
    };

    let changeset = match ctx.changeset(working_dir, base_branch, &current_branch).await {
        Ok(changeset) => changeset,
        Err(e) => return Artifact::error(format!("❌ 변경사항 분석 실패: {e}")),
    };

    if changeset.changed_files.is_empty() {
        return Artifact::error(format!(
            "❌ `origin/{base_branch}`와 비교할 변경사항이 없습니다."
        ));
    }

    let mut text = String::new();
    let _ = writeln!(text, "✅ **Base 브랜치 선택됨: `{base_branch}`**");
    let _ = writeln!(text);
    let _ = writeln!(text, "📊 **변경사항 요약**");
    let _ = writeln!(text, "- 현재 브랜치: `{current_branch}`");
    let _ = writeln!(text, "- 변경 파일: {}개", changeset.changed_files.len());
    let _ = writeln!(text, "- 커밋: {}개", changeset.commit_count);
    let _ = writeln!(text);
    let _ = writeln!(text, "📝 **변경된 파일**");
    for (ext, files) in group_by_extension(&changeset.changed_files) {
        let preview = files
            .iter()
            .take(GROUP_PREVIEW_MAX)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let more = if files.len() > GROUP_PREVIEW_MAX {
            format!(" 외 {}개", files.len() - GROUP_PREVIEW_MAX)
        } else {
            String::new()
        };
        let _ = writeln!(text, "  📁 .{ext} ({}개): {preview}{more}", files.len());
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "📦 **커밋 목록**");
    for commit in changeset.commits.iter().take(COMMIT_LIST_MAX) {
        let _ = writeln!(text, "- {commit}");
    }
    if changeset.commits.len() > COMMIT_LIST_MAX {
        let _ = writeln!(text, "  ... 외 {}개", changeset.commits.len() - COMMIT_LIST_MAX);
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "🎫 **작업 티켓 번호를 입력해주세요**");
    let _ = write!(
        text,
        "(예: {}-1234, 없으면 '없음' 입력)",
        ctx.config.ticket_prefix
    );

    Artifact::success(text)
}
