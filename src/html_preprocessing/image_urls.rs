//! WebP rewriting for CDN image URLs.
//!
//! Image hosts serving `img*` / `static*` domains expose a WebP rendition of
//! every raster image at the original URL plus `_.webp`.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

const WEBP_SUFFIX: &str = "_.webp";

/// Raster image URL on an `img`/`static` host.
///
/// - `https?://(?:img|static)` - scheme and host prefix
/// - `[^\s"'<>()]*?` - rest of the URL, shortest first, never leaving the URL
/// - `\.(?:png|jpg|gif|jpeg|bmp)` - first raster extension
/// - `(_\.webp)?` - an existing suffix, consumed so the URL is skipped
static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://(?:img|static)[^\s"'<>()]*?\.(?:png|jpg|gif|jpeg|bmp)(_\.webp)?"#)
        .expect("IMAGE_URL_RE: hardcoded regex is valid")
});

/// Append `_.webp` to every matching image URL in `img_url`.
///
/// Works on a bare URL as well as on HTML holding several URLs. URLs that
/// already carry the suffix are skipped, so the function is idempotent.
pub fn replace_webp_pic(img_url: &str) -> Cow<'_, str> {
    if img_url.is_empty() {
        return Cow::Borrowed(img_url);
    }

    IMAGE_URL_RE.replace_all(img_url, |caps: &Captures| {
        // Group 1 present: already rewritten.
        if caps.get(1).is_some() {
            caps[0].to_string()
        } else {
            format!("{}{WEBP_SUFFIX}", &caps[0])
        }
    })
}
