//! Fluent builder for `PrepConfig`
//!
//! All fields have defaults, so the builder only records overrides and
//! validates them in `build()`.

use crate::errors::PrepResult;

use super::types::PrepConfig;

#[derive(Debug, Clone, Default)]
pub struct PrepConfigBuilder {
    config: PrepConfig,
}

impl PrepConfig {
    #[must_use]
    pub fn builder() -> PrepConfigBuilder {
        PrepConfigBuilder::default()
    }
}

impl PrepConfigBuilder {
    /// Set the maximum accepted input size in bytes. Must be non-zero.
    #[must_use]
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.config.max_input_bytes = bytes;
        self
    }

    #[must_use]
    pub fn extract_body(mut self, enabled: bool) -> Self {
        self.config.extract_body = enabled;
        self
    }

    #[must_use]
    pub fn strip_noise(mut self, enabled: bool) -> Self {
        self.config.strip_noise = enabled;
        self
    }

    #[must_use]
    pub fn convert_line_breaks(mut self, enabled: bool) -> Self {
        self.config.convert_line_breaks = enabled;
        self
    }

    #[must_use]
    pub fn double_tabs(mut self, enabled: bool) -> Self {
        self.config.double_tabs = enabled;
        self
    }

    #[must_use]
    pub fn rewrite_webp(mut self, enabled: bool) -> Self {
        self.config.rewrite_webp = enabled;
        self
    }

    /// Wrap results that do not open with a block tag in `<div>...</div>`.
    #[must_use]
    pub fn wrap_root(mut self, enabled: bool) -> Self {
        self.config.wrap_root = enabled;
        self
    }

    /// Validate and return the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PrepError::InvalidConfig` if `max_input_bytes` is zero.
    pub fn build(self) -> PrepResult<PrepConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
