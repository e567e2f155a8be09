//! Lexical patterns for HTML tags and attributes.
//!
//! All three patterns are anchored at `^` and describe a single token at the
//! current scan position. Compiled regexes hold no match cursor, so reusing
//! the statics across calls always gives a fresh match from the start of the
//! slice handed in.

pub mod scanner;

use regex::Regex;
use std::sync::LazyLock;

pub use scanner::{Attribute, StartTag, parse_attributes, parse_end_tag, parse_start_tag};

/// Opening tag with attributes and optional self-close marker.
///
/// Captures: (1) tag name, (2) raw attribute text, (3) `/` or empty.
pub static START_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^<([-A-Za-z0-9_]+)((?:\s+[a-zA-Z_:][-a-zA-Z0-9_:.]*(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^>\s]+))?)*)\s*(/?)>"#,
    )
    .expect("START_TAG: hardcoded regex is valid")
});

/// Closing tag. Captures: (1) tag name.
pub static END_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</([-A-Za-z0-9_]+)[^>]*>").expect("END_TAG: hardcoded regex is valid")
});

/// Single attribute assignment, anchored.
///
/// Captures: (1) name, (2) double-quoted value, (3) single-quoted value,
/// (4) bare value. At most one of 2..=4 participates; none for a bare
/// boolean attribute.
pub static ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^([a-zA-Z_:][-a-zA-Z0-9_:.]*)(?:\s*=\s*(?:"((?:\\.|[^"])*)"|'((?:\\.|[^'])*)'|([^>\s]+)))?"#,
    )
    .expect("ATTR: hardcoded regex is valid")
});
