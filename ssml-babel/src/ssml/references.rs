//! Reference tracking for content that cannot be read aloud verbatim.
//!
//! Literal URLs and image references make poor speech. When the renderer meets a link or
//! an image it asks the tracker for the most speakable label available, and the tracker
//! keeps the original markup as an HTML preview ("thumb html") so a UI can show what was
//! replaced next to the audio. Headings also get a preview entry, giving the UI an
//! outline of the spoken document.
//!
//! Label precedence:
//!
//! | Kind  | 1st choice               | 2nd choice                      | Fallback            |
//! |-------|--------------------------|---------------------------------|---------------------|
//! | Link  | text, if not a URL       | title, if present and not a URL | `URL Link N`        |
//! | Image | alt text, if non-empty   | `「title」のイメージ`            | `Image N`           |
//!
//! `N` comes from a per-kind counter that starts at 1 and only advances when the fallback
//! is used. A tracker lives for exactly one conversion.

use super::phrases::Phrases;
use crate::markup::{escape_attr, escape_text};
use serde::Serialize;
use url::Url;

/// A hyperlink met while rendering, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: Option<String>,
    pub title: Option<String>,
    pub text: String,
}

/// Per-conversion counters and collected previews.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTracker {
    link_counter: usize,
    image_counter: usize,
    links: Vec<Link>,
    unreadable: Vec<String>,
}

impl Default for ReferenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self {
            link_counter: 1,
            image_counter: 1,
            links: Vec::new(),
            unreadable: Vec::new(),
        }
    }

    /// Next number a URL-only link would be spoken as.
    pub fn link_counter(&self) -> usize {
        self.link_counter
    }

    /// Next number an unlabeled image would be spoken as.
    pub fn image_counter(&self) -> usize {
        self.image_counter
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// HTML previews of headings, links and images, in encounter order.
    pub fn unreadable(&self) -> &[String] {
        &self.unreadable
    }

    pub fn into_parts(self) -> (Vec<Link>, Vec<String>) {
        (self.links, self.unreadable)
    }

    /// Record an outline entry for a heading. `raw` must already be escaped.
    pub fn outline_heading(&mut self, level: u8, raw: &str) {
        let indent = level.saturating_sub(1);
        self.unreadable.push(format!(
            r#"<div style="margin-left:{indent}em;font-weight:bold">{raw}</div>"#
        ));
    }

    /// Pick the spoken label for a link and record it.
    ///
    /// `text` is the link's rendered content; `href` and `title` are raw source values.
    pub fn speak_link(
        &mut self,
        href: Option<String>,
        title: Option<String>,
        text: String,
        phrases: &Phrases,
    ) -> String {
        let label = if !is_url(&text) {
            text.clone()
        } else {
            match title.as_deref() {
                Some(title) if !is_url(title) => escape_text(title),
                _ => {
                    let label = phrases.link_label(self.link_counter);
                    self.link_counter += 1;
                    label
                }
            }
        };

        let mut anchor = String::from("<a");
        if let Some(href) = href.as_deref() {
            anchor.push_str(&format!(r#" href="{}""#, escape_attr(href)));
        }
        if let Some(title) = title.as_deref() {
            anchor.push_str(&format!(r#" title="{}""#, escape_attr(title)));
        }
        anchor.push_str(&format!(">{label}</a>"));
        self.unreadable.push(anchor);

        self.links.push(Link { href, title, text });
        label
    }

    /// Pick the spoken label for an image and record a figure preview.
    ///
    /// `text` is the escaped alt text; `href` and `title` are raw source values.
    pub fn speak_image(
        &mut self,
        href: Option<&str>,
        title: Option<&str>,
        text: &str,
        phrases: &Phrases,
    ) -> String {
        let label = if !text.is_empty() {
            text.to_string()
        } else {
            match title {
                Some(title) if !title.is_empty() => phrases.image_of_label(&escape_text(title)),
                _ => {
                    let label = phrases.image_label(self.image_counter);
                    self.image_counter += 1;
                    label
                }
            }
        };

        let mut img = String::from("<img");
        if let Some(href) = href {
            img.push_str(&format!(r#" src="{}""#, escape_attr(href)));
        }
        if let Some(title) = title {
            img.push_str(&format!(r#" title="{}""#, escape_attr(title)));
        }
        img.push_str("/>");
        self.unreadable.push(format!(
            "<figure>{img}<figcaption>{label}</figcaption></figure>"
        ));

        label
    }
}

/// Syntactic URL check: the string parses as an absolute URL with a host.
///
/// `https://example.com/x` and `ftp://files.example` are URLs; `mailto:a@b`, bare words
/// and relative paths are not. No network access is involved.
pub fn is_url(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return false;
    }
    Url::parse(trimmed)
        .map(|url| url.has_host())
        .unwrap_or(false)
}
