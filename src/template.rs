//! PR template resolution
//!
//! Resolves a PR body template for a working directory with a fixed
//! precedence chain, falling back to a built-in default. The filesystem is
//! re-read on every call; nothing is cached.

use std::fs;
use std::path::Path;

/// Built-in PR template used when the repository has none
pub const DEFAULT_PR_TEMPLATE: &str = "\
## 🛠 작업 내용

- JIRA:

## 📝 변경 사항

- [ ] 새로운 기능
- [ ] 기존 기능 수정 or improve
- [ ] Bug fix
- [ ] 리팩토링
- [ ] 문서작성
- [ ] 설정값 변경

## ✔️ 체크리스트

- [ ] 단위 테스트 작성완료
- [ ] Local 테스트 완료

## 🙏🏻 리뷰 포인트 (To Reviewers)
";

/// Resolves PR templates for a working directory
///
/// Precedence, first match wins:
/// 1. `<workingDir>/.github/PULL_REQUEST_TEMPLATE.md`
/// 2. `<workingDir>/.github/pull_request_template.md`
/// 3. A custom path configured at startup
/// 4. The built-in default template
#[derive(Debug, Clone, Default)]
pub struct TemplateResolver {
    custom_template_path: Option<String>,
}

impl TemplateResolver {
    /// Create a resolver with an optional custom template path
    pub fn new(custom_template_path: Option<String>) -> Self {
        Self {
            custom_template_path,
        }
    }

    /// Resolve the PR template for a working directory
    pub fn resolve(&self, working_dir: &str) -> String {
        let candidates = [
            Some(format!("{working_dir}/.github/PULL_REQUEST_TEMPLATE.md")),
            Some(format!("{working_dir}/.github/pull_request_template.md")),
            self.custom_template_path.clone(),
        ];

        for candidate in candidates.into_iter().flatten() {
            let path = Path::new(&candidate);
            if path.is_file() {
                if let Ok(text) = fs::read_to_string(path) {
                    return text;
                }
            }
        }

        DEFAULT_PR_TEMPLATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_template(dir: &Path, name: &str, content: &str) {
        let github_dir = dir.join(".github");
        fs::create_dir_all(&github_dir).unwrap();
        fs::write(github_dir.join(name), content).unwrap();
    }

    #[test]
    fn test_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let resolver = TemplateResolver::new(None);
        let template = resolver.resolve(tmp.path().to_str().unwrap());
        assert_eq!(template, DEFAULT_PR_TEMPLATE);
    }

    #[test]
    fn test_uppercase_template_wins() {
        let tmp = TempDir::new().unwrap();
        write_template(tmp.path(), "PULL_REQUEST_TEMPLATE.md", "upper");
        write_template(tmp.path(), "pull_request_template.md", "lower");

        let resolver = TemplateResolver::new(None);
        assert_eq!(resolver.resolve(tmp.path().to_str().unwrap()), "upper");
    }

    #[test]
    fn test_lowercase_template_used_when_alone() {
        let tmp = TempDir::new().unwrap();
        write_template(tmp.path(), "pull_request_template.md", "lower");

        let resolver = TemplateResolver::new(None);
        assert_eq!(resolver.resolve(tmp.path().to_str().unwrap()), "lower");
    }

    #[test]
    fn test_custom_path_used_after_repo_templates() {
        let tmp = TempDir::new().unwrap();
        let custom = tmp.path().join("custom.md");
        fs::write(&custom, "custom").unwrap();

        let resolver = TemplateResolver::new(Some(custom.to_str().unwrap().to_string()));
        assert_eq!(resolver.resolve(tmp.path().to_str().unwrap()), "custom");

        // Repo template takes precedence over the custom path
        write_template(tmp.path(), "PULL_REQUEST_TEMPLATE.md", "repo");
        assert_eq!(resolver.resolve(tmp.path().to_str().unwrap()), "repo");
    }

    #[test]
    fn test_directory_named_like_template_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let github_dir = tmp.path().join(".github");
        fs::create_dir_all(github_dir.join("PULL_REQUEST_TEMPLATE.md")).unwrap();

        let resolver = TemplateResolver::new(None);
        assert_eq!(
            resolver.resolve(tmp.path().to_str().unwrap()),
            DEFAULT_PR_TEMPLATE
        );
    }
}
