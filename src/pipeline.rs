//! Paste preprocessing pipeline.
//!
//! Chains the independent transforms in the order a rich-text importer
//! applies them to clipboard HTML:
//!
//! 1. `extract_body_content` - keep the `<body>` of full documents
//! 2. `trim_html` - drop comments, scripts and styles
//! 3. `replace_br` - `<br>` to newlines
//! 4. `replace_escape_symbol` - double tabs
//! 5. `replace_webp_pic` - WebP variants of CDN images
//! 6. `add_root_div` - only when the result does not open with a block tag
//!
//! Each step can be switched off through [`PrepConfig`]. The input size is
//! checked before any pattern runs.

use std::borrow::Cow;

use crate::config::PrepConfig;
use crate::errors::{PrepError, PrepResult};
use crate::html_preprocessing::{
    add_root_div, extract_body_content, replace_br, replace_escape_symbol, replace_webp_pic,
    start_with_block_tag, start_with_html_element, trim_html,
};

/// What a fragment opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentSummary {
    pub starts_with_element: bool,
    pub starts_with_block: bool,
}

/// Configured transform chain for pasted HTML.
#[derive(Debug, Clone, Default)]
pub struct PastePreprocessor {
    config: PrepConfig,
}

/// Run one transform, keeping the current buffer when it reports no change.
fn run_step<F>(current: String, step_name: &str, step: F) -> String
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    let next = match step(&current) {
        Cow::Borrowed(unchanged) if unchanged.len() == current.len() => None,
        changed => Some(changed.into_owned()),
    };

    match next {
        Some(next) => {
            log::debug!(
                "{step_name}: {} -> {} bytes",
                current.len(),
                next.len()
            );
            next
        }
        None => current,
    }
}

impl PastePreprocessor {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Run the enabled steps over `html`.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::InputTooLarge` when `html` is longer than
    /// `max_input_bytes`. No transform is applied in that case.
    pub fn process(&self, html: &str) -> PrepResult<String> {
        let limit = self.config.max_input_bytes();
        if html.len() > limit {
            log::warn!(
                "Rejecting pasted HTML of {} bytes (limit {limit})",
                html.len()
            );
            return Err(PrepError::InputTooLarge {
                size: html.len(),
                limit,
            });
        }

        let mut result = html.to_string();

        if self.config.extract_body() {
            result = run_step(result, "extract_body_content", extract_body_content);
        }
        if self.config.strip_noise() {
            result = run_step(result, "trim_html", trim_html);
        }
        if self.config.convert_line_breaks() {
            result = run_step(result, "replace_br", replace_br);
        }
        if self.config.double_tabs() {
            result = run_step(result, "replace_escape_symbol", replace_escape_symbol);
        }
        if self.config.rewrite_webp() {
            result = run_step(result, "replace_webp_pic", replace_webp_pic);
        }
        if self.config.wrap_root() && !start_with_block_tag(&result) {
            result = run_step(result, "add_root_div", add_root_div);
        }

        Ok(result)
    }

    /// Report how `html` opens, without transforming it.
    #[must_use]
    pub fn classify(&self, html: &str) -> FragmentSummary {
        FragmentSummary {
            starts_with_element: start_with_html_element(html),
            starts_with_block: start_with_block_tag(html),
        }
    }
}

/// Run the default pipeline over `html`.
///
/// # Errors
///
/// Returns `PrepError::InputTooLarge` for input above the default 10 MB bound.
pub fn preprocess_paste(html: &str) -> PrepResult<String> {
    PastePreprocessor::default().process(html)
}
