use html_paste_prep::{
    extract_body_content, first_text_wrap_inline_tag, replace_br, replace_webp_pic,
    start_with_block_tag, start_with_html_element, trim_html,
};
use std::time::{Duration, Instant};

const BUDGET: Duration = Duration::from_millis(250);

/// Run `f` once to compile its lazy patterns, then time a second run.
fn timed<F: Fn()>(f: F) -> Duration {
    f();
    let start = Instant::now();
    f();
    start.elapsed()
}

/// The body pattern skips attributes as an alternation of quoted segments
/// and single characters. With the `regex` crate this stays linear even on
/// unbalanced quote runs.
#[test]
fn test_redos_resistance_body_attributes() {
    let adversarial = "<body ".to_string() + &"\"'".repeat(10000) + "x";
    let elapsed = timed(|| {
        let _ = extract_body_content(&adversarial);
    });

    println!("Body attribute test: {elapsed:?}");
    assert!(elapsed < BUDGET, "ReDoS vulnerability detected: took {elapsed:?}");
}

#[test]
fn test_redos_resistance_unterminated_script() {
    let adversarial = "<script>".to_string() + &"<scrip".repeat(5000);
    let elapsed = timed(|| {
        let _ = trim_html(&adversarial);
    });

    println!("Unterminated script test: {elapsed:?}");
    assert!(elapsed < BUDGET, "ReDoS vulnerability detected: took {elapsed:?}");
}

/// Every removal splices a new comment opener together, so a rescan after
/// each removal would be quadratic.
#[test]
fn test_redos_resistance_nested_comments() {
    let n = 8000;
    let adversarial = "<!-".repeat(n) + "<!--x-->" + &"-->".repeat(n);
    let elapsed = timed(|| {
        let _ = trim_html(&adversarial);
    });

    println!("Nested comment test: {elapsed:?}");
    assert!(elapsed < BUDGET, "Quadratic noise removal detected: took {elapsed:?}");
}

#[test]
fn test_redos_resistance_comments_inside_script_tag() {
    let adversarial = "<script ".to_string() + &"a".repeat(100_000) + &"<!--x-->".repeat(10000);
    let elapsed = timed(|| {
        let _ = trim_html(&adversarial);
    });

    println!("Comments inside script tag test: {elapsed:?}");
    assert!(elapsed < BUDGET, "Quadratic noise removal detected: took {elapsed:?}");
}

#[test]
fn test_redos_resistance_br_line() {
    let adversarial = "<br".repeat(10000);
    let elapsed = timed(|| {
        let _ = replace_br(&adversarial);
    });

    println!("Unterminated br test: {elapsed:?}");
    assert!(elapsed < BUDGET, "ReDoS vulnerability detected: took {elapsed:?}");
}

#[test]
fn test_redos_resistance_leading_element() {
    let adversarial = "<p ".to_string() + &"'\"".repeat(10000);
    let elapsed = timed(|| {
        let _ = start_with_html_element(&adversarial);
        let _ = start_with_block_tag(&adversarial);
        let _ = first_text_wrap_inline_tag(&adversarial);
    });

    println!("Leading element test: {elapsed:?}");
    assert!(elapsed < BUDGET, "ReDoS vulnerability detected: took {elapsed:?}");
}

/// A long URL without an extension must still fail fast.
#[test]
fn test_redos_resistance_webp_url() {
    let adversarial = "https://img.".to_string() + &"a.".repeat(10000);
    let elapsed = timed(|| {
        let _ = replace_webp_pic(&adversarial);
    });

    println!("WebP URL test: {elapsed:?}");
    assert!(elapsed < BUDGET, "ReDoS vulnerability detected: took {elapsed:?}");
}
