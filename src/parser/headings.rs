// file: src/parser/headings.rs
// description: heading extraction and anchor slug generation for table-of-contents navigation
// reference: GitHub-flavored markdown heading anchors

use crate::models::Anchor;
use crate::parser::patterns::{
    CLOSING_HASHES, NON_SLUG_CHARS, SECTION_HEADING, WHITESPACE_RUNS, is_code_fence,
};

/// Deterministic URL-fragment id for a heading text.
///
/// Lowercases, drops everything that is not a word character, whitespace or `-`,
/// turns whitespace runs into `-` and trims hyphens from both ends. Applying it to
/// its own output returns the same slug.
pub fn generate_heading_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(stripped.trim(), "-");
    hyphenated.trim_matches('-').to_string()
}

pub struct HeadingExtractor;

impl HeadingExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Level 2-4 headings in document order. Headings whose slug is empty are skipped,
    /// repeated ids are kept.
    pub fn extract(&self, content: &str) -> Vec<Anchor> {
        let mut anchors = Vec::new();
        let mut in_code_block = false;

        for line in content.lines() {
            if is_code_fence(line) {
                in_code_block = !in_code_block;
                continue;
            }

            if in_code_block {
                continue;
            }

            let Some(caps) = SECTION_HEADING.captures(line.trim_end()) else {
                continue;
            };

            let level = caps[1].len() as u8;
            let title = CLOSING_HASHES.replace(&caps[2], "").trim().to_string();
            let id = generate_heading_id(&title);

            if id.is_empty() {
                continue;
            }

            anchors.push(Anchor { title, id, level });
        }

        anchors
    }
}

impl Default for HeadingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slug_basic() {
        assert_eq!(generate_heading_id("Getting Started"), "getting-started");
        assert_eq!(generate_heading_id("  Webhooks: Retry Policy!  "), "webhooks-retry-policy");
        assert_eq!(generate_heading_id("GET /v1/events"), "get-v1events");
        assert_eq!(generate_heading_id("-- edge --"), "edge");
        assert_eq!(generate_heading_id("!!!"), "");
    }

    #[test]
    fn test_slug_idempotent() {
        for text in [
            "Getting Started",
            "OAuth 2.0 & Tokens",
            "a - b",
            "Ünïcode Héading",
            "snake_case_heading",
            "   ",
        ] {
            let once = generate_heading_id(text);
            assert_eq!(generate_heading_id(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_extract_levels_and_order() {
        let extractor = HeadingExtractor::new();
        let content = "# Title\n\n## Intro\ntext\n### Details ###\n#### Deeper\n##### Ignored\n## Intro";

        let anchors = extractor.extract(content);
        let summary: Vec<(&str, &str, u8)> = anchors
            .iter()
            .map(|a| (a.title.as_str(), a.id.as_str(), a.level))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Intro", "intro", 2),
                ("Details", "details", 3),
                ("Deeper", "deeper", 4),
                ("Intro", "intro", 2),
            ]
        );
    }

    #[test]
    fn test_empty_slug_heading_dropped() {
        let extractor = HeadingExtractor::new();
        let anchors = extractor.extract("## Intro\n### ???\n");

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].id, "intro");
    }

    #[test]
    fn test_code_fences_ignored() {
        let extractor = HeadingExtractor::new();
        let content = "## Install\n```bash\n## not a heading\n```\n## Usage";

        let ids: Vec<String> = extractor.extract(content).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["install", "usage"]);
    }

    #[test]
    fn test_no_headings() {
        let extractor = HeadingExtractor::new();
        assert!(extractor.extract("plain text only").is_empty());
        assert!(extractor.extract("").is_empty());
    }
}
