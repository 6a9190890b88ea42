// file: src/parser/normalizer.rs
// description: Markdown to plain-text normalization for search records
// reference: Markdown specification

use crate::parser::patterns::{
    BLANK_RUNS, BOLD_STARS, BOLD_UNDERSCORES, HEADING_LINE, IMAGE, INLINE_CODE, ITALIC_STARS,
    LINK, TITLE_HEADING,
};
use crate::utils::Validator;

pub const FALLBACK_TITLE: &str = "Untitled";

pub struct MarkdownNormalizer {
    fallback_title: String,
}

impl MarkdownNormalizer {
    pub fn new() -> Self {
        Self::with_fallback_title(FALLBACK_TITLE)
    }

    pub fn with_fallback_title(fallback_title: impl Into<String>) -> Self {
        Self {
            fallback_title: fallback_title.into(),
        }
    }

    /// First `# ` heading anywhere in the document, or the fallback title.
    pub fn extract_title(&self, content: &str) -> String {
        TITLE_HEADING
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .find(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_title.clone())
    }

    pub fn normalize(&self, content: &str) -> String {
        let content = content.replace("\r\n", "\n");

        let text = self.strip_headings(&content);
        let text = self.strip_emphasis(&text);
        let text = INLINE_CODE.replace_all(&text, "$1");
        let text = IMAGE.replace_all(&text, "");
        let text = LINK.replace_all(&text, "$1");
        let text = BLANK_RUNS.replace_all(&text, "\n");

        text.trim().to_string()
    }

    pub fn plain_body(&self, content: &str, max_chars: usize) -> String {
        Self::truncate(&self.normalize(content), max_chars).to_string()
    }

    pub fn truncate(text: &str, max_chars: usize) -> &str {
        Validator::truncate_chars(text, max_chars)
    }

    fn strip_headings(&self, content: &str) -> String {
        HEADING_LINE.replace_all(content, "").into_owned()
    }

    fn strip_emphasis(&self, content: &str) -> String {
        let text = BOLD_STARS.replace_all(content, "$1");
        let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
        ITALIC_STARS.replace_all(&text, "$1").into_owned()
    }
}

impl Default for MarkdownNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
