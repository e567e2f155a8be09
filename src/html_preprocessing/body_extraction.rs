//! Body extraction for full HTML documents pasted as fragments.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches the first `<body ...>...</body>` element.
///
/// Attribute text is scanned as quoted segments or single non-quote,
/// non-`>` characters, so a `>` inside a quoted attribute value does not end
/// the tag. Captures: (1) inner content.
static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<body(?:\s(?:"[^"]*"|'[^']*'|[^'">])*)?>(.*?)</body\s*>"#)
        .expect("BODY_RE: hardcoded regex is valid")
});

/// Return the trimmed inner content of the first `<body>` element.
///
/// Falls back to the input unchanged when there is no body element or when
/// the body holds only whitespace. The returned value borrows from `html`
/// in every case.
///
/// # Example
/// ```
/// use html_paste_prep::extract_body_content;
///
/// let html = "<html><body class=\"x\">\n  <p>Hi</p>\n</body></html>";
/// assert_eq!(extract_body_content(html), "<p>Hi</p>");
/// assert_eq!(extract_body_content("<p>Hi</p>"), "<p>Hi</p>");
/// ```
pub fn extract_body_content(html: &str) -> Cow<'_, str> {
    if html.is_empty() {
        return Cow::Borrowed(html);
    }

    let content = BODY_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|content| !content.is_empty());

    match content {
        Some(content) => Cow::Borrowed(content),
        None => {
            log::debug!("No non-empty <body> element found, keeping input as-is");
            Cow::Borrowed(html)
        }
    }
}
