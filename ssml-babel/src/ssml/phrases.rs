//! Localized words spoken in place of unreadable content.
//!
//! Templates use `{n}` for a counter and `{title}` for an image title.

/// Spoken phrases used by the SSML renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Phrases {
    /// Label for a link with no speakable text or title, e.g. `URL Link {n}`.
    pub url_link: String,
    /// Label for an image with neither alt text nor title, e.g. `Image {n}`.
    pub image_numbered: String,
    /// Label for an image known only by its title.
    pub image_of: String,
    pub checked: String,
    pub unchecked: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            url_link: "URL Link {n}".to_string(),
            image_numbered: "Image {n}".to_string(),
            image_of: "「{title}」のイメージ".to_string(),
            checked: "チェック済".to_string(),
            unchecked: "未チェック".to_string(),
        }
    }
}

impl Phrases {
    pub fn link_label(&self, n: usize) -> String {
        self.url_link.replace("{n}", &n.to_string())
    }

    pub fn image_label(&self, n: usize) -> String {
        self.image_numbered.replace("{n}", &n.to_string())
    }

    pub fn image_of_label(&self, title: &str) -> String {
        self.image_of.replace("{title}", title)
    }

    pub fn checkbox(&self, checked: bool) -> &str {
        if checked {
            &self.checked
        } else {
            &self.unchecked
        }
    }
}
