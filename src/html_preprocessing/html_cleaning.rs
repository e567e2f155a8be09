//! Noise removal for pasted HTML.
//!
//! Strips HTML comments, C-style block comments, `<script>` and `<style>`
//! elements. Tag names match ASCII case-insensitively and each construct
//! ends at the nearest closing delimiter after its opener.
//!
//! Removal is one forward scan over the input. Kept text goes to an output
//! buffer, and a construct is cut from the buffer as soon as its closer
//! arrives. The scan then continues from the end of the buffer, so a
//! delimiter spliced together by a removal (`<!-<!--x-->-y-->`) is found
//! like any other.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Noise {
    Comment,
    BlockComment,
    Script,
    Style,
}

impl Noise {
    fn index(self) -> usize {
        self as usize
    }
}

/// Opening delimiter in the output buffer, `start..end` in bytes.
#[derive(Debug, Clone, Copy)]
struct Opener {
    start: usize,
    end: usize,
}

/// `<script` or `<style` ending at `name_end`. It opens an element once the
/// next character is whitespace or `>`.
#[derive(Debug, Clone, Copy)]
struct TagStart {
    pos: usize,
    name_end: usize,
    kind: Noise,
}

#[derive(Debug, Default)]
struct NoiseScanner {
    out: String,
    /// Unclosed openers per kind, in buffer order.
    openers: [Vec<Opener>; 4],
    tag_starts: Vec<TagStart>,
    /// Offsets of every `>` left in the buffer.
    tag_ends: Vec<usize>,
    removed: bool,
}

fn ends_with_ignore_case(haystack: &str, suffix: &str) -> bool {
    haystack.len() >= suffix.len()
        && haystack.as_bytes()[haystack.len() - suffix.len()..]
            .eq_ignore_ascii_case(suffix.as_bytes())
}

impl NoiseScanner {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn push(&mut self, c: char) {
        let pending = self
            .tag_starts
            .last()
            .is_some_and(|tag| tag.name_end == self.out.len());
        if pending && c != '>' && !c.is_whitespace() {
            self.tag_starts.pop();
        }

        self.out.push(c);
        let len = self.out.len();

        match c {
            '-' if self.out.ends_with("<!--") => self.open(Noise::Comment, len - 4),
            '*' if self.out.ends_with("/*") => self.open(Noise::BlockComment, len - 2),
            '/' if self.out.ends_with("*/") => {
                self.close(Noise::BlockComment, len - 2);
            }
            't' | 'T' | 'e' | 'E' => self.find_tag_start(),
            '>' => self.end_tag(),
            _ => {}
        }
    }

    /// Record a `<script` or `<style` name ending the buffer.
    fn find_tag_start(&mut self) {
        let len = self.out.len();
        let found = [("<script", Noise::Script), ("<style", Noise::Style)]
            .into_iter()
            .find(|(name, _)| ends_with_ignore_case(&self.out, name));
        if let Some((name, kind)) = found {
            self.tag_starts.push(TagStart {
                pos: len - name.len(),
                name_end: len,
                kind,
            });
        }
    }

    fn open(&mut self, kind: Noise, start: usize) {
        self.openers[kind.index()].push(Opener {
            start,
            end: self.out.len(),
        });
    }

    /// Cut from the earliest unclosed opener of `kind` to the end of the
    /// buffer, if that opener ends before `closer_start`.
    fn close(&mut self, kind: Noise, closer_start: usize) -> bool {
        let Some(&first) = self.openers[kind.index()].first() else {
            return false;
        };
        if first.end > closer_start {
            return false;
        }
        self.truncate(first.start);
        true
    }

    fn truncate(&mut self, at: usize) {
        self.out.truncate(at);
        for openers in &mut self.openers {
            while openers.last().is_some_and(|opener| opener.end > at) {
                openers.pop();
            }
        }
        while self.tag_starts.last().is_some_and(|tag| tag.name_end > at) {
            self.tag_starts.pop();
        }
        while self.tag_ends.last().is_some_and(|&gt| gt >= at) {
            self.tag_ends.pop();
        }
        // A name dropped for a bad next character can be live again.
        if !self.tag_starts.last().is_some_and(|tag| tag.name_end == at) {
            self.find_tag_start();
        }
        self.removed = true;
    }

    /// A `>` was pushed: it may close a comment, a script or a style, or
    /// finish a `<script ...>` / `<style ...>` opening tag.
    fn end_tag(&mut self) {
        let gt = self.out.len() - 1;

        if self.out.ends_with("-->") && self.close(Noise::Comment, gt - 2) {
            return;
        }

        let before = self.out[..gt].trim_end_matches(char::is_whitespace);
        let closer = if ends_with_ignore_case(before, "</script") {
            Some((Noise::Script, before.len() - "</script".len()))
        } else if ends_with_ignore_case(before, "</style") {
            Some((Noise::Style, before.len() - "</style".len()))
        } else {
            None
        };
        if closer.is_some_and(|(kind, start)| self.close(kind, start)) {
            return;
        }

        // Attributes never hold `>`, so only names after the previous `>`
        // can belong to this tag.
        let previous = self.tag_ends.last().copied();
        let first = self
            .tag_starts
            .partition_point(|tag| previous.is_some_and(|p| tag.pos < p));
        if let Some(&tag) = self.tag_starts.get(first) {
            self.openers[tag.kind.index()].push(Opener {
                start: tag.pos,
                end: self.out.len(),
            });
        }
        self.tag_ends.push(gt);
    }
}

/// Remove comments, block comments, scripts and styles.
///
/// Runs in one pass, linear in the input. The output never holds a complete
/// construct, so `trim_html(trim_html(s)) == trim_html(s)`. Unterminated
/// openers are kept as text.
///
/// Whitespace outside the removed spans is left alone.
pub fn trim_html(html: &str) -> Cow<'_, str> {
    let mut scanner = NoiseScanner::with_capacity(html.len());
    html.chars().for_each(|c| scanner.push(c));

    if !scanner.removed {
        return Cow::Borrowed(html);
    }

    log::debug!(
        "Stripped {} bytes of comments/scripts/styles",
        html.len() - scanner.out.len()
    );
    Cow::Owned(scanner.out)
}

/// Double every horizontal tab.
pub fn replace_escape_symbol(html: &str) -> Cow<'_, str> {
    if html.contains('\t') {
        Cow::Owned(html.replace('\t', "\t\t"))
    } else {
        Cow::Borrowed(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_all_noise() {
        let html = "<!--c-->x<script>bad()</script>y<style>.a{}</style>z";
        assert_eq!(trim_html(html), "xyz");
    }

    #[test]
    fn test_non_greedy_removal() {
        let html = "<script>a()</script>keep<script>b()</script>";
        assert_eq!(trim_html(html), "keep");

        let html = "<!-- one -->mid<!-- two -->";
        assert_eq!(trim_html(html), "mid");
    }

    #[test]
    fn test_case_insensitive_and_attributes() {
        let html = "<SCRIPT type=\"text/javascript\">x</Script>a<Style media=\"print\">p{}</STYLE>b";
        assert_eq!(trim_html(html), "ab");
    }

    #[test]
    fn test_multiline_content() {
        let html = "<p>a</p>\n<!--\nmulti\nline\n-->\n<p>b</p>";
        assert_eq!(trim_html(html), "<p>a</p>\n\n<p>b</p>");
    }

    #[test]
    fn test_block_comments() {
        assert_eq!(trim_html("a/* note */b"), "ab");
    }

    #[test]
    fn test_nested_delimiters_are_stable() {
        let html = "<!-<!--x-->-y-->z";
        let once = trim_html(html);
        assert_eq!(once, "z");
        assert_eq!(trim_html(&once), once);
    }

    #[test]
    fn test_removal_can_complete_a_script_tag() {
        let html = "<scr<!--x-->ipt>a()</script>b";
        assert_eq!(trim_html(html), "b");
    }

    #[test]
    fn test_removal_right_after_script_name() {
        assert_eq!(trim_html("<script<!--a-->>x</script>y"), "y");
        assert_eq!(trim_html("<style/*a*/ media=x>p{}</style>z"), "z");
    }

    #[test]
    fn test_comment_inside_script_attributes() {
        // The comment goes first, which re-opens the attribute list.
        let html = "<script a <!-- > -->b>c</script>d";
        assert_eq!(trim_html(html), "d");
    }

    #[test]
    fn test_deep_nesting_is_stable() {
        let html = "<!-".repeat(50) + "<!--x-->" + &"-->".repeat(50) + "end";
        let once = trim_html(&html).into_owned();
        assert!(once.ends_with("end"));
        assert!(!once.contains("<!--") || !once.contains("-->"));
        assert_eq!(trim_html(&once), once);
    }

    #[test]
    fn test_closers_without_openers_are_text() {
        let html = "a-->b*/c</script>d</style >";
        assert!(matches!(trim_html(html), Cow::Borrowed(_)));
        // The closer may not overlap its own opener.
        assert!(matches!(trim_html("/*/x<!-->y"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_script_inside_unterminated_comment() {
        assert_eq!(trim_html("<!-- <script>x</script>"), "<!-- ");
    }

    #[test]
    fn test_script_name_needs_delimiter() {
        let html = "<scripts>x</script>";
        assert_eq!(trim_html(html), html);
        assert_eq!(trim_html("<script\n>x</script\t>y"), "y");
    }

    #[test]
    fn test_unterminated_comment_is_kept() {
        let html = "a<!-- open";
        assert_eq!(trim_html(html), html);
    }

    #[test]
    fn test_no_noise_borrows() {
        assert!(matches!(trim_html("<p>plain</p>"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_escape_symbol() {
        assert_eq!(replace_escape_symbol("a\tb\t\tc"), "a\t\tb\t\t\t\tc");
        assert!(matches!(replace_escape_symbol("no tabs"), Cow::Borrowed(_)));
    }
}
