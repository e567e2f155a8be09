//! String transforms applied to pasted HTML before rich-text import.
//!
//! Every function here is pure and independent:
//! - Body extraction from full documents
//! - Noise removal (comments, scripts, styles) and tab doubling
//! - `<br>` to newline conversion
//! - Leading element / block tag detection
//! - Root `<div>` and first-text `<span>` wrapping
//! - WebP rewriting of CDN image URLs
//!
//! Transforms return `Cow<'_, str>`, borrowing the input when nothing changes.

pub mod body_extraction;
pub mod element_detection;
pub mod html_cleaning;
pub mod image_urls;
pub mod line_breaks;
pub mod wrapping;

pub use body_extraction::extract_body_content;
pub use element_detection::{start_with_block_tag, start_with_html_element};
pub use html_cleaning::{replace_escape_symbol, trim_html};
pub use image_urls::replace_webp_pic;
pub use line_breaks::{LinefeedInsertion, replace_br, start_with_html_element_insert_linefeed};
pub use wrapping::{add_root_div, first_text_wrap_inline_tag};
