//! Test utilities shared by the integration tests

/// Install a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a full HTML document around `body`, the shape browsers put on
/// the clipboard.
#[allow(dead_code)]
pub fn create_clipboard_html(body: &str) -> String {
    format!(
        r#"<html>
<head>
    <meta charset="UTF-8">
    <style>p {{ margin: 0; }}</style>
</head>
<body>
<!--StartFragment-->{body}<!--EndFragment-->
</body>
</html>"#
    )
}
