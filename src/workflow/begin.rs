//! Step 1: begin the PR workflow
//!
//! Checks the current branch and offers base-branch candidates.

use crate::types::Artifact;
use crate::workflow::WorkflowContext;
use std::fmt::Write;

/// Base-branch candidates offered to the caller, in fixed order
const BASE_CANDIDATES: [&str; 3] = ["develop", "main", "master"];

/// Start the PR workflow: verify the head branch and list base candidates
///
/// Hard precondition: the workflow never targets a trunk branch (`main` or
/// `master`) as the head ref.
pub async fn begin_workflow(ctx: &WorkflowContext<'_>, working_dir: &str) -> Artifact {
    let Ok(current_branch) = ctx.git.current_branch(working_dir).await else {
        return Artifact::error("❌ Git 저장소가 아닙니다.");
    };

    if current_branch == "main" || current_branch == "master" {
        return Artifact::error(format!(
            "❌ 현재 브랜치가 '{current_branch}'입니다.\n\
             feature 브랜치를 먼저 생성해주세요:\n\
             ```\n\
             git checkout -b feature/your-feature\n\
             ```"
        ));
    }

    let branches = ctx.git.remote_branches(working_dir).await.unwrap_or_default();
    let available: Vec<&str> = BASE_CANDIDATES
        .iter()
        .copied()
        .filter(|candidate| branches.iter().any(|b| b == candidate))
        .collect();

    let mut text = String::new();
    let _ = writeln!(text, "🚀 **PR 생성 워크플로우 시작**");
    let _ = writeln!(text);
    let _ = writeln!(text, "📌 **현재 상태**");
    let _ = writeln!(text, "- 브랜치: `{current_branch}`");
    let _ = writeln!(text);
    let _ = writeln!(text, "🎯 **Base 브랜치를 선택해주세요:**");
    let _ = writeln!(text);
    for (index, branch) in available.iter().enumerate() {
        let default_mark = if *branch == ctx.config.default_base_branch {
            " (기본값)"
        } else {
            ""
        };
        let _ = writeln!(text, "  {}. `{branch}`{default_mark}", index + 1);
    }
    let _ = writeln!(text, "  {}. 직접 입력", available.len() + 1);
    let _ = writeln!(text);
    let _ = write!(text, "어떤 브랜치로 PR을 생성할까요? (번호 또는 브랜치명)");

    Artifact::success(text)
}
