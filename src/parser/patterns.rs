// file: src/parser/patterns.rs
// description: compiled regex patterns for markdown normalization and heading extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Headings
    pub static ref TITLE_HEADING: Regex = Regex::new(
        r"(?m)^#[ \t]+(.+?)[ \t]*$"
    ).expect("TITLE_HEADING regex is valid");

    pub static ref HEADING_LINE: Regex = Regex::new(
        r"(?m)^#{1,6}[ \t]+.*$"
    ).expect("HEADING_LINE regex is valid");

    pub static ref SECTION_HEADING: Regex = Regex::new(
        r"^(#{2,4})[ \t]+(\S.*)$"
    ).expect("SECTION_HEADING regex is valid");

    pub static ref CLOSING_HASHES: Regex = Regex::new(
        r"[ \t]+#+[ \t]*$"
    ).expect("CLOSING_HASHES regex is valid");

    // Emphasis
    pub static ref BOLD_STARS: Regex = Regex::new(
        r"\*\*(.+?)\*\*"
    ).expect("BOLD_STARS regex is valid");

    pub static ref BOLD_UNDERSCORES: Regex = Regex::new(
        r"__(.+?)__"
    ).expect("BOLD_UNDERSCORES regex is valid");

    pub static ref ITALIC_STARS: Regex = Regex::new(
        r"\*([^*\n]+)\*"
    ).expect("ITALIC_STARS regex is valid");

    // Inline code, images, links
    pub static ref INLINE_CODE: Regex = Regex::new(
        r"`([^`\n]+)`"
    ).expect("INLINE_CODE regex is valid");

    pub static ref IMAGE: Regex = Regex::new(
        r"!\[[^\]]*\]\([^)]*\)[ \t]*"
    ).expect("IMAGE regex is valid");

    pub static ref LINK: Regex = Regex::new(
        r"\[([^\]]*)\]\([^)]*\)"
    ).expect("LINK regex is valid");

    // Whitespace
    pub static ref BLANK_RUNS: Regex = Regex::new(
        r"\n{2,}"
    ).expect("BLANK_RUNS regex is valid");

    // Slugs
    pub static ref NON_SLUG_CHARS: Regex = Regex::new(
        r"[^\w\s-]"
    ).expect("NON_SLUG_CHARS regex is valid");

    pub static ref WHITESPACE_RUNS: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUNS regex is valid");
}

pub fn is_code_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}
