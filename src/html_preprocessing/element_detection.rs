//! Leading-element checks.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::tag_tables::BLOCK;

/// `<name` plus attribute-like tokens (double-quoted, single-quoted or bare)
/// and a closing `>`, anchored at the start.
static LEADING_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<[A-Za-z][-A-Za-z0-9_:.]*(?:\s(?:"[^"]*"|'[^']*'|[^'">])*)?/?>"#)
        .expect("LEADING_ELEMENT_RE: hardcoded regex is valid")
});

/// Opening tag of any block element after optional leading whitespace,
/// self-closing form (`<hr/>`) included.
///
/// Built from the block table on first use, names sorted so the pattern is
/// the same from run to run.
static LEADING_BLOCK_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names = BLOCK
        .sorted_names()
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^\s*<(?:{names})(?:\s[^>]*)?/?>"))
        .expect("LEADING_BLOCK_TAG_RE: block table names form a valid regex")
});

fn without_newlines(html: &str) -> Cow<'_, str> {
    if html.contains(['\n', '\r']) {
        Cow::Owned(html.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(html)
    }
}

/// Whether `html`, with newlines removed, opens with a complete start tag.
///
/// The tag name is not checked against any table.
pub fn start_with_html_element(html: &str) -> bool {
    LEADING_ELEMENT_RE.is_match(&without_newlines(html))
}

/// Whether `s` opens, after leading whitespace, with a block-level tag.
///
/// Tag names match case-insensitively.
pub fn start_with_block_tag(s: &str) -> bool {
    LEADING_BLOCK_TAG_RE.is_match(s)
}
