//! Getter methods for `PrepConfig`

use super::types::PrepConfig;

impl PrepConfig {
    #[must_use]
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    #[must_use]
    pub fn extract_body(&self) -> bool {
        self.extract_body
    }

    #[must_use]
    pub fn strip_noise(&self) -> bool {
        self.strip_noise
    }

    #[must_use]
    pub fn convert_line_breaks(&self) -> bool {
        self.convert_line_breaks
    }

    #[must_use]
    pub fn double_tabs(&self) -> bool {
        self.double_tabs
    }

    #[must_use]
    pub fn rewrite_webp(&self) -> bool {
        self.rewrite_webp
    }

    #[must_use]
    pub fn wrap_root(&self) -> bool {
        self.wrap_root
    }
}
