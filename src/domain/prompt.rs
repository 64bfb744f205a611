use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{AppError, AppResult};

/// Placeholder token substituted with the reduced diff text.
pub const DIFF_PLACEHOLDER: &str = "${diff_content}";

/// A prompt template loaded once from disk, read-only afterwards.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            AppError::Input(format!(
                "cannot read prompt template {}: {err}",
                path.display()
            ))
        })?;
        Ok(Self::new(text))
    }

    /// Substitute the placeholder with `diff_text`. The substitution is a
    /// literal single pass over the template; the inserted text is never
    /// re-scanned, so placeholder-like syntax inside the diff stays verbatim.
    /// A template without the placeholder is returned unchanged.
    pub fn render(&self, diff_text: &str) -> String {
        if !self.text.contains(DIFF_PLACEHOLDER) {
            warn!("prompt template has no {DIFF_PLACEHOLDER} placeholder; diff content will not be included");
            return self.text.clone();
        }
        self.text.replace(DIFF_PLACEHOLDER, diff_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholder_with_diff() {
        let template = PromptTemplate::new("DIFF:\n${diff_content}\nEND".to_string());
        assert_eq!(template.render("+x"), "DIFF:\n+x\nEND");
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        let template = PromptTemplate::new("summarize something".to_string());
        assert_eq!(template.render("+very long diff"), "summarize something");
    }

    #[test]
    fn empty_diff_keeps_template_text() {
        let template = PromptTemplate::new("before ${diff_content} after".to_string());
        assert_eq!(template.render(""), "before  after");
    }

    #[test]
    fn placeholder_syntax_inside_diff_is_not_expanded() {
        let template = PromptTemplate::new("${diff_content}".to_string());
        assert_eq!(template.render("+${diff_content}"), "+${diff_content}");
    }

    #[test]
    fn load_error_names_the_path() {
        let err = PromptTemplate::load(Path::new("/no/such/template.txt")).unwrap_err();
        assert!(err.to_string().contains("/no/such/template.txt"));
    }
}
