//! HTML detection and normalization
//!
//! Content reaching the converter is either Markdown or an HTML fragment produced by a
//! rich-text editor. HTML is detected with a coarse tag heuristic and normalized to
//! Markdown before rendering, so a single rendering path handles both inputs.
//!
//! A string is HTML iff stripping everything that looks like a tag (`<...>`) changes its
//! length. A Markdown document containing a literal `a <b and c> d` is therefore classified
//! as HTML, and so is one using `<https://...>` autolinks.

pub mod to_markdown;

use once_cell::sync::Lazy;
use regex::Regex;

pub use to_markdown::html_to_markdown;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is a valid regex"));

/// Remove everything that looks like an HTML tag.
pub fn strip_tags(source: &str) -> String {
    TAG_PATTERN.replace_all(source, "").into_owned()
}

/// Whether the string contains at least one HTML tag.
pub fn is_html(source: &str) -> bool {
    strip_tags(source).len() != source.len()
}
