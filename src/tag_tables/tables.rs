//! The seven process-wide classification tables.

use std::sync::LazyLock;

use super::{TagSet, make_map};

/// Void elements: no closing tag, no content.
pub static EMPTY: LazyLock<TagSet> = LazyLock::new(|| {
    make_map(
        "area,base,basefont,br,col,command,embed,frame,hr,img,input,isindex,keygen,link,meta,param,source,track,wbr",
    )
});

/// Block-level elements.
///
/// Follows editor import heuristics rather than the HTML content model, so a
/// few historically inline elements (`code`, `button`, `iframe`, ...) count
/// as blocks here. `a` and `br` stay out: a paste opening with a link or a
/// line break is inline content and still gets a root `<div>`.
pub static BLOCK: LazyLock<TagSet> = LazyLock::new(|| {
    make_map(concat!(
        "address,applet,article,aside,audio,blockquote,button,canvas,center,code,",
        "dd,del,dir,div,dl,dt,fieldset,figcaption,figure,footer,form,frameset,",
        "h1,h2,h3,h4,h5,h6,header,hgroup,hr,iframe,ins,isindex,li,map,menu,",
        "noframes,noscript,object,ol,output,p,pre,section,script,table,tbody,",
        "td,tfoot,th,thead,tr,ul,video"
    ))
});

/// Inline elements.
///
/// Not disjoint from [`BLOCK`]: `applet`, `button`, `code`, `del`, `iframe`,
/// `ins`, `map`, `object` and `script` are in both, so a tag can answer true
/// to both [`is_block_element`] and [`is_inline_element`].
pub static INLINE: LazyLock<TagSet> = LazyLock::new(|| {
    make_map(concat!(
        "a,abbr,acronym,applet,b,basefont,bdo,big,br,button,cite,code,del,dfn,",
        "em,font,i,iframe,img,input,ins,kbd,label,map,object,q,s,samp,script,",
        "select,small,span,strike,strong,sub,sup,textarea,tt,u,var"
    ))
});

/// Elements whose closing tag may be left out because the next sibling or
/// the parent's close ends them.
pub static CLOSE_SELF: LazyLock<TagSet> =
    LazyLock::new(|| make_map("colgroup,dd,dt,li,options,p,td,tfoot,th,thead,tr"));

/// Boolean attributes whose value mirrors their name when written bare.
pub static FILL_ATTRS: LazyLock<TagSet> = LazyLock::new(|| {
    make_map(
        "checked,compact,declare,defer,disabled,ismap,multiple,nohref,noresize,noshade,nowrap,readonly,selected",
    )
});

/// Attributes a downstream converter drops.
pub static FILTER_ATTRS: LazyLock<TagSet> = LazyLock::new(|| make_map("style,class"));

/// Raw-text elements; their content is never tag-parsed.
pub static SPECIAL: LazyLock<TagSet> = LazyLock::new(|| make_map("script,style"));

#[inline]
pub fn is_void_element(name: &str) -> bool {
    EMPTY.contains(name)
}

#[inline]
pub fn is_block_element(name: &str) -> bool {
    BLOCK.contains(name)
}

#[inline]
pub fn is_inline_element(name: &str) -> bool {
    INLINE.contains(name)
}

#[inline]
pub fn is_close_self_element(name: &str) -> bool {
    CLOSE_SELF.contains(name)
}

#[inline]
pub fn is_fill_attr(name: &str) -> bool {
    FILL_ATTRS.contains(name)
}

#[inline]
pub fn is_filter_attr(name: &str) -> bool {
    FILTER_ATTRS.contains(name)
}

#[inline]
pub fn is_special_element(name: &str) -> bool {
    SPECIAL.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements() {
        for name in ["br", "img", "hr", "input", "meta", "wbr"] {
            assert!(is_void_element(name), "{name} should be void");
        }
        assert!(!is_void_element("div"));
    }

    #[test]
    fn test_block_includes_code() {
        assert!(is_block_element("code"));
        assert!(is_block_element("div"));
        assert!(is_block_element("h6"));
        assert!(!is_block_element("span"));
        assert!(!is_block_element("a"));
    }

    #[test]
    fn test_block_inline_overlap() {
        let both: Vec<&str> = BLOCK
            .sorted_names()
            .into_iter()
            .filter(|name| INLINE.contains(name))
            .collect();
        assert_eq!(
            both,
            ["applet", "button", "code", "del", "iframe", "ins", "map", "object", "script"]
        );
        assert!(is_inline_element("a") && !is_block_element("a"));
        assert!(is_inline_element("br") && !is_block_element("br"));
    }

    #[test]
    fn test_inline_elements() {
        assert!(is_inline_element("span"));
        assert!(is_inline_element("strong"));
        assert!(!is_inline_element("div"));
    }

    #[test]
    fn test_attribute_tables() {
        assert!(is_fill_attr("checked"));
        assert!(!is_fill_attr("href"));
        assert!(is_filter_attr("style"));
        assert!(is_filter_attr("class"));
        assert_eq!(FILTER_ATTRS.len(), 2);
    }

    #[test]
    fn test_special_and_close_self() {
        assert!(is_special_element("script"));
        assert!(is_special_element("style"));
        assert!(!is_special_element("pre"));
        assert!(is_close_self_element("li"));
        assert!(!is_close_self_element("ul"));
    }

    #[test]
    fn test_lookup_does_not_fold_case() {
        assert!(!is_block_element("DIV"));
    }
}
