pub mod config;
pub mod errors;
pub mod html_preprocessing;
pub mod lexical;
pub mod pipeline;
pub mod tag_tables;

pub use config::{PrepConfig, PrepConfigBuilder};
pub use errors::{PrepError, PrepResult};
pub use html_preprocessing::{
    LinefeedInsertion, add_root_div, extract_body_content, first_text_wrap_inline_tag,
    replace_br, replace_escape_symbol, replace_webp_pic, start_with_block_tag,
    start_with_html_element, start_with_html_element_insert_linefeed, trim_html,
};
pub use lexical::{
    ATTR, Attribute, END_TAG, START_TAG, StartTag, parse_attributes, parse_end_tag,
    parse_start_tag,
};
pub use pipeline::{FragmentSummary, PastePreprocessor, preprocess_paste};
pub use tag_tables::{
    BLOCK, CLOSE_SELF, EMPTY, FILL_ATTRS, FILTER_ATTRS, INLINE, SPECIAL, TagSet, make_map,
};
