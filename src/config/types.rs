//! Core configuration types for paste preprocessing
//!
//! This module contains the `PrepConfig` struct that selects the pipeline
//! steps and bounds the accepted input size.

use serde::{Deserialize, Serialize};

use crate::errors::{PrepError, PrepResult};

/// Default input bound (10 MB).
///
/// Paste and import payloads are far below this; the bound exists so that
/// untrusted input cannot feed arbitrarily large strings to the regex passes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Pipeline configuration
///
/// Every step is enabled by default. Missing JSON fields take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    /// Inputs longer than this many bytes are rejected.
    pub(crate) max_input_bytes: usize,
    /// Keep only the `<body>` content of full documents.
    pub(crate) extract_body: bool,
    /// Remove comments, scripts and styles.
    pub(crate) strip_noise: bool,
    /// Turn `<br>` tags into newlines.
    pub(crate) convert_line_breaks: bool,
    /// Double tab characters.
    pub(crate) double_tabs: bool,
    /// Append `_.webp` to CDN image URLs.
    pub(crate) rewrite_webp: bool,
    /// Wrap output that does not start with a block tag in a root `<div>`.
    pub(crate) wrap_root: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            extract_body: true,
            strip_noise: true,
            convert_line_breaks: true,
            double_tabs: true,
            rewrite_webp: true,
            wrap_root: true,
        }
    }
}

impl PrepConfig {
    /// Parse a config from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::Json` for malformed JSON and
    /// `PrepError::InvalidConfig` when validation fails.
    pub fn from_json(json: &str) -> PrepResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> PrepResult<()> {
        if self.max_input_bytes == 0 {
            return Err(PrepError::InvalidConfig(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
