//! Tag classification tables.
//!
//! Membership sets of HTML tag and attribute names used by the transforms and
//! the lexical scanner. Every table is built once from a comma-separated
//! literal via [`make_map`] and is read-only afterwards.
//!
//! Lookups are case-as-given: callers lower-case names before asking unless
//! the consuming regex already runs case-insensitively.

mod tables;

use std::collections::HashSet;

pub use tables::{
    BLOCK, CLOSE_SELF, EMPTY, FILL_ATTRS, FILTER_ATTRS, INLINE, SPECIAL, is_block_element,
    is_close_self_element, is_fill_attr, is_filter_attr, is_inline_element, is_special_element,
    is_void_element,
};

/// A set of tag or attribute names.
///
/// Presence is the only information carried; there is no payload per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: HashSet<String>,
}

impl TagSet {
    /// Returns `true` when `name` is a member, compared byte-for-byte.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate member names in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Member names sorted, for callers that need a stable order
    /// (for example when building a regex alternation).
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}

/// Build a [`TagSet`] from a comma-separated list.
///
/// Tokens are taken verbatim (no trimming, no case folding). Duplicates
/// collapse to one member. Splitting `""` yields a set containing the empty
/// string, not an empty set.
///
/// # Example
/// ```
/// use html_paste_prep::make_map;
///
/// let set = make_map("a,b,a");
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("b"));
/// ```
pub fn make_map(list: &str) -> TagSet {
    list.split(',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_map_members() {
        let set = make_map("a,b,c");
        assert_eq!(set.len(), 3);
        for name in ["a", "b", "c"] {
            assert!(set.contains(name), "missing {name}");
        }
        assert!(!set.contains("d"));
    }

    #[test]
    fn test_make_map_collapses_duplicates() {
        let set = make_map("a,a,b");
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_make_map_empty_string_is_a_member() {
        let set = make_map("");
        assert_eq!(set.len(), 1);
        assert!(set.contains(""));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_make_map_is_case_sensitive() {
        let set = make_map("div");
        assert!(set.contains("div"));
        assert!(!set.contains("DIV"));
    }

    #[test]
    fn test_sorted_names() {
        let set = make_map("p,div,a");
        assert_eq!(set.sorted_names(), vec!["a", "div", "p"]);
    }
}
