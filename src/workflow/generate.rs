//! Step 3: generate PR content
//!
//! Synthesizes the PR title and body from the changeset and the resolved
//! template, and instructs the caller to confirm before creation.

use crate::workflow::content::{
    build_title, classify_changes, group_by_extension, render_body, truncate_diff,
    COMMIT_PREVIEW_MAX, FILE_PREVIEW_MAX, NO_TICKET_SENTINEL,
};
use crate::types::Artifact;
use crate::workflow::WorkflowContext;
use std::fmt::Write;

/// Maximum extension groups listed in the detail section
const EXTENSION_SUMMARY_MAX: usize = 5;

/// Generate PR title and body for review by the caller
///
/// This step never creates the PR itself; its output is meant to be carried
/// forward unchanged into `create_pr_confirmed`.
pub async fn generate_pr_content(
    ctx: &WorkflowContext<'_>,
    working_dir: &str,
    base_branch: Option<&str>,
    jira_ticket: Option<&str>,
    additional_context: Option<&str>,
) -> Artifact {
    let base_branch = base_branch.unwrap_or(&ctx.config.default_base_branch);
    let ticket = jira_ticket.unwrap_or("");

    let Ok(current_branch) = ctx.git.current_branch(working_dir).await else {
        return Artifact::error("❌ 현재 브랜치를 확인할 수 없습니다.");
    };

    let changeset = match ctx.changeset(working_dir, base_branch, &current_branch).await {
        Ok(changeset) => changeset,
        Err(e) => return Artifact::error(format!("❌ 변경사항 분석 실패: {e}")),
    };

    let change_types = classify_changes(&changeset.changed_files, &changeset.commits);
    let title = build_title(ticket, &changeset.commits);
    let template = ctx.templates.resolve(working_dir);
    let body = render_body(&template, ticket, &changeset, &change_types);
    let diff_preview = truncate_diff(&changeset.diff);

    let ticket_display = if ticket.is_empty() || ticket == NO_TICKET_SENTINEL {
        NO_TICKET_SENTINEL
    } else {
        ticket
    };
    let type_summary = change_types
        .iter()
        .map(|ct| ct.label())
        .collect::<Vec<_>>()
        .join(", ");

    let mut text = String::new();
    let _ = writeln!(text, "📝 **PR 내용 생성 완료**");
    let _ = writeln!(text);
    let _ = writeln!(text, "## 📋 변경사항 상세 정보");
    let _ = writeln!(text);
    let _ = writeln!(text, "**브랜치 정보:**");
    let _ = writeln!(text, "- 현재 브랜치: `{current_branch}`");
    let _ = writeln!(text, "- Base 브랜치: `{base_branch}`");
    let _ = writeln!(text, "- JIRA 티켓: {ticket_display}");
    let _ = writeln!(text, "- 변경 유형: {type_summary}");
    let _ = writeln!(text);
    let _ = writeln!(text, "**커밋 ({}개):**", changeset.commit_count);
    for commit in changeset.commits.iter().take(COMMIT_PREVIEW_MAX) {
        let _ = writeln!(text, "- {commit}");
    }
    if changeset.commits.len() > COMMIT_PREVIEW_MAX {
        let _ = writeln!(text, "... 외 {}개", changeset.commits.len() - COMMIT_PREVIEW_MAX);
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "**변경된 파일 ({}개):**", changeset.changed_files.len());
    for file in changeset.changed_files.iter().take(FILE_PREVIEW_MAX) {
        let _ = writeln!(text, "- {file}");
    }
    if changeset.changed_files.len() > FILE_PREVIEW_MAX {
        let _ = writeln!(
            text,
            "... 외 {}개",
            changeset.changed_files.len() - FILE_PREVIEW_MAX
        );
    }
    write_file_breakdown(&mut text, &changeset.changed_files);
    if let Some(additional) = additional_context.filter(|s| !s.is_empty()) {
        let _ = writeln!(text);
        let _ = writeln!(text, "**추가 컨텍스트:** {additional}");
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "**코드 변경사항 (Diff):**");
    let _ = writeln!(text, "```diff");
    let _ = writeln!(text, "{diff_preview}");
    let _ = writeln!(text, "```");
    let _ = writeln!(text);
    let _ = writeln!(text, "## 📌 PR 제목");
    let _ = writeln!(text, "```");
    let _ = writeln!(text, "{title}");
    let _ = writeln!(text, "```");
    let _ = writeln!(text);
    let _ = writeln!(text, "## 📄 PR 본문");
    let _ = writeln!(text, "```markdown");
    let _ = writeln!(text, "{body}");
    let _ = writeln!(text, "```");
    let _ = writeln!(text);
    let _ = write!(
        text,
        "**다음 단계:** 사용자가 확인하면 `create_pr_confirmed` 툴을 호출하세요.\n\
         title, body, base_branch는 위 값을 그대로 전달해야 합니다."
    );

    Artifact::success(text)
}

/// Append per-extension counts plus test/config file callouts
fn write_file_breakdown(text: &mut String, changed_files: &[String]) {
    let groups = group_by_extension(changed_files);
    if groups.is_empty() {
        return;
    }

    let _ = writeln!(text);
    let _ = writeln!(text, "**파일 유형별 분류:**");
    for (ext, files) in groups.iter().take(EXTENSION_SUMMARY_MAX) {
        let _ = writeln!(text, "- .{ext}: {}개", files.len());
    }

    let test_files: Vec<&String> = changed_files
        .iter()
        .filter(|f| {
            let lower = f.to_lowercase();
            lower.contains("test") || lower.contains("spec")
        })
        .collect();
    if !test_files.is_empty() {
        let preview = test_files
            .iter()
            .take(3)
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(text, "- 테스트 파일: {}개 ({preview})", test_files.len());
    }

    let config_files: Vec<&String> = changed_files
        .iter()
        .filter(|f| {
            f.ends_with(".yaml") || f.ends_with(".yml") || f.ends_with(".properties")
                || f.ends_with(".json")
        })
        .collect();
    if !config_files.is_empty() {
        let preview = config_files
            .iter()
            .take(3)
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(text, "- 설정 파일: {}개 ({preview})", config_files.len());
    }
}
