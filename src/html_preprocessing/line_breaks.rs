//! `<br>` to newline conversion.
//!
//! A `<br>` that is directly followed by an element does not become its own
//! newline; instead the newline moves inside that element, right after its
//! first tag/text boundary. Otherwise the `<br>` is replaced by `\n`.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

use super::element_detection::start_with_html_element;

/// A `<br>` with the rest of its line on either side.
///
/// The preceding-text group is greedy and neither group crosses a line
/// break, so with several `<br>` on one line only the last one is split.
/// Captures: (1) text before, (2) text after.
static BR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([^\r\n]*)<br\s*/?>([^\r\n]*)").expect("BR_LINE_RE: hardcoded regex is valid")
});

/// First tag followed by text. Quoted attribute values may hold `>`.
/// Captures: (1) the tag, (2) the first text character.
static TAG_TEXT_BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<(?:"[^"]*"|'[^']*'|[^'"<>])+>)([^<])"#)
        .expect("TAG_TEXT_BOUNDARY_RE: hardcoded regex is valid")
});

/// Outcome of [`start_with_html_element_insert_linefeed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinefeedInsertion {
    /// The input (newlines ignored) opens with an element.
    pub starts_with_html: bool,
    /// Input with a newline after the first tag/text boundary when
    /// `starts_with_html` is set, otherwise the input unchanged.
    pub html: String,
}

/// Detect a leading element and, if present, put a newline between the
/// first tag and the text right after it.
///
/// ```
/// use html_paste_prep::start_with_html_element_insert_linefeed;
///
/// let out = start_with_html_element_insert_linefeed("<p>b</p>");
/// assert!(out.starts_with_html);
/// assert_eq!(out.html, "<p>\nb</p>");
/// ```
pub fn start_with_html_element_insert_linefeed(html: &str) -> LinefeedInsertion {
    if !start_with_html_element(html) {
        return LinefeedInsertion {
            starts_with_html: false,
            html: html.to_string(),
        };
    }

    LinefeedInsertion {
        starts_with_html: true,
        html: TAG_TEXT_BOUNDARY_RE
            .replacen(html, 1, "${1}\n${2}")
            .into_owned(),
    }
}

/// Replace `<br>` / `<br/>` tags with newlines.
///
/// Empty input and input without `<br>` are returned as-is.
pub fn replace_br(html: &str) -> Cow<'_, str> {
    if html.is_empty() {
        return Cow::Borrowed(html);
    }

    BR_LINE_RE.replace_all(html, |caps: &Captures| {
        let before = &caps[1];
        let after = &caps[2];

        let insertion = start_with_html_element_insert_linefeed(after);
        if insertion.starts_with_html {
            format!("{before}{}", insertion.html)
        } else {
            format!("{before}\n{after}")
        }
    })
}
