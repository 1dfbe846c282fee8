//! PR content synthesis
//!
//! Builds PR titles and bodies from commit/diff/file metadata and the
//! resolved template, including the heuristic change-type classification.

use crate::types::ChangeSet;
use std::fmt::Write;

/// Caller-facing sentinel meaning "no ticket", distinct from an omitted field
pub const NO_TICKET_SENTINEL: &str = "없음";

/// Placeholder title used when the branch has no commits
pub const NO_COMMITS_PLACEHOLDER: &str = "변경사항";

/// Maximum diff lines included in the generated artifact
pub const DIFF_PREVIEW_MAX_LINES: usize = 300;

/// Maximum changed files listed in the generated artifact
pub const FILE_PREVIEW_MAX: usize = 15;

/// Maximum commit subjects listed in the generated artifact
pub const COMMIT_PREVIEW_MAX: usize = 10;

/// Heuristic classification of a changeset
///
/// Derived from a keyword scan over changed file paths and commit subjects;
/// a changeset can carry several types at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    /// New functionality ("feat"/"add" keywords)
    Feature,
    /// Bug fix ("fix" keyword)
    Bugfix,
    /// Refactoring ("refactor" keyword)
    Refactor,
    /// Documentation (doc-extension files)
    Docs,
    /// Test changes ("test" keyword)
    Tests,
    /// Fallback when no keyword matched
    Maintenance,
}

impl ChangeType {
    /// All change types in fixed checklist order
    pub const ALL: [Self; 6] = [
        Self::Feature,
        Self::Bugfix,
        Self::Refactor,
        Self::Docs,
        Self::Tests,
        Self::Maintenance,
    ];

    /// Human-readable label used in summaries
    pub fn label(self) -> &'static str {
        match self {
            Self::Feature => "새로운 기능",
            Self::Bugfix => "Bug fix",
            Self::Refactor => "리팩토링",
            Self::Docs => "문서작성",
            Self::Tests => "테스트",
            Self::Maintenance => "유지보수",
        }
    }

    /// Keywords that identify this type's checkbox line in a template
    fn checkbox_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Feature => &["새로운 기능", "feature"],
            Self::Bugfix => &["bug fix", "버그", "bugfix"],
            Self::Refactor => &["리팩토링", "refactor"],
            Self::Docs => &["문서", "docs"],
            Self::Tests => &["테스트 코드", "테스트 추가", "tests"],
            Self::Maintenance => &["유지보수", "maintenance"],
        }
    }
}

/// Classify a changeset by scanning file paths and commit subjects
///
/// The scan is case-insensitive over the concatenation of all paths and
/// subjects. Returns matched types in fixed order; defaults to
/// [`ChangeType::Maintenance`] when nothing matched.
pub fn classify_changes(changed_files: &[String], commits: &[String]) -> Vec<ChangeType> {
    let haystack = changed_files
        .iter()
        .chain(commits.iter())
        .map(|s| s.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    let has_doc_file = changed_files
        .iter()
        .any(|f| f.to_lowercase().ends_with(".md"));

    let mut matched = Vec::new();
    if haystack.contains("feat") || haystack.contains("add") {
        matched.push(ChangeType::Feature);
    }
    if haystack.contains("fix") {
        matched.push(ChangeType::Bugfix);
    }
    if haystack.contains("refactor") {
        matched.push(ChangeType::Refactor);
    }
    if has_doc_file {
        matched.push(ChangeType::Docs);
    }
    if haystack.contains("test") {
        matched.push(ChangeType::Tests);
    }

    if matched.is_empty() {
        matched.push(ChangeType::Maintenance);
    }
    matched
}

/// Build a PR title from the ticket and the newest commit subject
///
/// The ticket is prefixed in brackets unless it is empty or the `없음`
/// sentinel; with no commits the placeholder text stands in for a subject.
pub fn build_title(ticket: &str, commits: &[String]) -> String {
    let first_commit = commits
        .first()
        .map_or(NO_COMMITS_PLACEHOLDER, String::as_str);

    if ticket.is_empty() || ticket == NO_TICKET_SENTINEL {
        first_commit.to_string()
    } else {
        format!("[{ticket}] {first_commit}")
    }
}

/// Truncate a diff to the preview limit
///
/// A diff longer than the limit is cut to the first 300 lines with a
/// trailing marker naming the total; shorter diffs pass through unmodified.
pub fn truncate_diff(diff: &str) -> String {
    let lines: Vec<&str> = diff.lines().collect();
    if lines.len() <= DIFF_PREVIEW_MAX_LINES {
        return diff.to_string();
    }

    let mut out = lines[..DIFF_PREVIEW_MAX_LINES].join("\n");
    let _ = write!(
        out,
        "\n... (총 {}줄 중 {DIFF_PREVIEW_MAX_LINES}줄만 표시)",
        lines.len()
    );
    out
}

/// Group changed files by extension, preserving first-seen order
///
/// Files without an extension are grouped under `other`.
pub fn group_by_extension(changed_files: &[String]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    for file in changed_files {
        let ext = file
            .rfind('.')
            .map_or("other", |idx| &file[idx + 1..])
            .to_string();
        let ext = if ext.is_empty() {
            "other".to_string()
        } else {
            ext
        };

        match groups.iter_mut().find(|(e, _)| *e == ext) {
            Some((_, files)) => files.push(file.clone()),
            None => groups.push((ext, vec![file.clone()])),
        }
    }

    groups
}

/// Fill a PR template with ticket and change-type information
///
/// - The `- JIRA:` line is completed with the ticket (or the sentinel).
/// - Change-type checkboxes matching a classified type are checked.
/// - Checkboxes inside a checklist section (testing steps) stay unchecked;
///   those are left for the human.
pub fn fill_template(template: &str, ticket: &str, change_types: &[ChangeType]) -> String {
    let ticket_display = if ticket.is_empty() {
        NO_TICKET_SENTINEL
    } else {
        ticket
    };

    let mut in_checklist_section = false;
    let mut out_lines = Vec::with_capacity(template.lines().count());

    for line in template.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            let heading = trimmed.to_lowercase();
            in_checklist_section = heading.contains("체크리스트") || heading.contains("checklist");
        }

        if trimmed.starts_with("- JIRA:") {
            let indent = &line[..line.len() - trimmed.len()];
            out_lines.push(format!("{indent}- JIRA: {ticket_display}"));
            continue;
        }

        if !in_checklist_section && trimmed.starts_with("- [ ]") {
            let label = trimmed.trim_start_matches("- [ ]").to_lowercase();
            let matched = change_types.iter().any(|ct| {
                ct.checkbox_keywords()
                    .iter()
                    .any(|keyword| label.contains(keyword))
            });
            if matched {
                out_lines.push(line.replacen("- [ ]", "- [x]", 1));
                continue;
            }
        }

        out_lines.push(line.to_string());
    }

    out_lines.join("\n")
}

/// Render the full PR body: filled template plus commit and file summaries
pub fn render_body(
    template: &str,
    ticket: &str,
    changeset: &ChangeSet,
    change_types: &[ChangeType],
) -> String {
    let mut body = fill_template(template, ticket, change_types);

    let _ = write!(
        body,
        "\n\n## 📦 커밋 내역 ({}개)\n",
        changeset.commit_count
    );
    for commit in changeset.commits.iter().take(COMMIT_PREVIEW_MAX) {
        let _ = writeln!(body, "- {commit}");
    }
    if changeset.commits.len() > COMMIT_PREVIEW_MAX {
        let _ = writeln!(
            body,
            "... 외 {}개",
            changeset.commits.len() - COMMIT_PREVIEW_MAX
        );
    }

    let _ = write!(
        body,
        "\n## 📁 변경된 파일 ({}개)\n",
        changeset.changed_files.len()
    );
    for file in changeset.changed_files.iter().take(FILE_PREVIEW_MAX) {
        let _ = writeln!(body, "- {file}");
    }
    if changeset.changed_files.len() > FILE_PREVIEW_MAX {
        let _ = writeln!(
            body,
            "... 외 {}개",
            changeset.changed_files.len() - FILE_PREVIEW_MAX
        );
    }

    body.trim_end().to_string()
}
