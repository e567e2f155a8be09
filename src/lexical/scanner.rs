//! Anchored token recognition on top of the lexical patterns.
//!
//! These helpers look at exactly one token at the start of the slice they are
//! given and report how many bytes it spans. They never build a tree; a caller
//! that wants to walk a document advances its own cursor by the returned
//! length.

use super::{ATTR, END_TAG, START_TAG};
use crate::tag_tables::{
    is_block_element, is_close_self_element, is_fill_attr, is_filter_attr, is_inline_element,
    is_special_element, is_void_element,
};

/// One attribute from a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    /// Set for attributes a downstream converter drops (`style`, `class`).
    pub filtered: bool,
}

/// A recognized opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lower-cased tag name.
    pub name: String,
    pub attributes: Vec<Attribute>,
    /// Explicit `/>` or a void element.
    pub self_closing: bool,
}

impl StartTag {
    pub fn is_block(&self) -> bool {
        is_block_element(&self.name)
    }

    /// Can be true together with [`StartTag::is_block`] (`code`, `button`, ...).
    pub fn is_inline(&self) -> bool {
        is_inline_element(&self.name)
    }

    /// Content up to the matching end tag is raw text.
    pub fn is_raw_text(&self) -> bool {
        is_special_element(&self.name)
    }

    pub fn closes_self(&self) -> bool {
        is_close_self_element(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Attributes that survive [`Attribute::filtered`].
    pub fn kept_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|attr| !attr.filtered)
    }
}

/// Recognize an opening tag at the start of `input`.
///
/// Returns the tag and the number of bytes it occupies.
pub fn parse_start_tag(input: &str) -> Option<(StartTag, usize)> {
    let caps = START_TAG.captures(input)?;
    let whole = caps.get(0)?;

    let name = caps[1].to_ascii_lowercase();
    let attributes = caps
        .get(2)
        .map(|raw| parse_attributes(raw.as_str()))
        .unwrap_or_default();
    let explicit_close = caps.get(3).is_some_and(|m| !m.as_str().is_empty());
    let self_closing = explicit_close || is_void_element(&name);

    Some((
        StartTag {
            name,
            attributes,
            self_closing,
        },
        whole.end(),
    ))
}

/// Recognize a closing tag at the start of `input`.
///
/// Returns the lower-cased name and the number of bytes consumed.
pub fn parse_end_tag(input: &str) -> Option<(String, usize)> {
    let caps = END_TAG.captures(input)?;
    let end = caps.get(0)?.end();
    Some((caps[1].to_ascii_lowercase(), end))
}

/// Split raw attribute text (group 2 of [`START_TAG`]) into attributes.
///
/// A bare attribute listed in the fill table takes its own name as value,
/// so `checked` reads as `checked="checked"`.
pub fn parse_attributes(raw: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut rest = raw;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let Some(caps) = ATTR.captures(rest) else {
            // Skip a character the pattern cannot start on and keep scanning.
            let skip = rest.chars().next().map_or(1, char::len_utf8);
            rest = &rest[skip..];
            continue;
        };

        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| {
                if is_fill_attr(&name) {
                    name.clone()
                } else {
                    String::new()
                }
            });
        let filtered = is_filter_attr(&name);

        attributes.push(Attribute {
            name,
            value,
            filtered,
        });

        let consumed = caps.get(0).map_or(rest.len(), |m| m.end());
        rest = &rest[consumed..];
    }

    attributes
}
