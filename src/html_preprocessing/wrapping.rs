//! Wrapping helpers: root `<div>` and inline span around the first text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// First run of text after a complete tag. Quoted attribute values may
/// hold `>`. Captures: (1) the text.
static FIRST_TEXT_NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:"[^"]*"|'[^']*'|[^'"<>])+>([^<]+)"#)
        .expect("FIRST_TEXT_NODE_RE: hardcoded regex is valid")
});

/// Wrap `html` in a single root `<div>`. Empty input stays empty.
pub fn add_root_div(html: &str) -> Cow<'_, str> {
    if html.is_empty() {
        Cow::Borrowed(html)
    } else {
        Cow::Owned(format!("<div>{html}</div>"))
    }
}

/// Wrap the first character of the first text node in a `<span>`.
///
/// The text node is trimmed before splitting; the rest of it and everything
/// after it are kept as they are. A whitespace-only text node turns into an
/// empty `<span></span>`.
///
/// # Example
/// ```
/// use html_paste_prep::first_text_wrap_inline_tag;
///
/// assert_eq!(
///     first_text_wrap_inline_tag("<p> Hello </p><p>x</p>"),
///     "<p><span>H</span>ello</p><p>x</p>"
/// );
/// ```
pub fn first_text_wrap_inline_tag(html: &str) -> Cow<'_, str> {
    let Some(text) = FIRST_TEXT_NODE_RE.captures(html).and_then(|caps| caps.get(1)) else {
        return Cow::Borrowed(html);
    };

    let trimmed = text.as_str().trim();
    let (first, rest) = match trimmed.char_indices().nth(1) {
        Some((idx, _)) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };

    let mut out = String::with_capacity(html.len() + "<span></span>".len());
    out.push_str(&html[..text.start()]);
    out.push_str("<span>");
    out.push_str(first);
    out.push_str("</span>");
    out.push_str(rest);
    out.push_str(&html[text.end()..]);
    Cow::Owned(out)
}
