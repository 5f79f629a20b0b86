//! Conversion orchestration (Markdown/HTML → SSML)
//!
//! Pipeline: content → HTML detection → (HTML → Markdown) → Markdown engine + SsmlRenderer
//! → SSML fragment + reference metadata

use crate::error::ConvertError;
use crate::html::{html_to_markdown, is_html};
use crate::markdown::render_markdown;
use crate::ssml::{Link, Phrases, SsmlRenderer};
use serde::Serialize;
use tracing::debug;

/// SSML produced by one conversion together with what was replaced to produce it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub ssml: String,
    pub info: ConversionInfo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionInfo {
    /// Hyperlinks in document order.
    pub links: Vec<Link>,
    /// HTML previews of headings, links and images, in document order.
    pub thumb_html: Vec<String>,
}

/// Convert Markdown or HTML content to an SSML fragment.
///
/// Absent or empty content yields `Ok(None)`. HTML input is normalized to Markdown first;
/// a normalization failure is returned as-is. Every call renders with its own renderer and
/// counters, so link and image numbering always starts at 1.
pub fn md_to_ssml(
    content: Option<&str>,
    phrases: &Phrases,
) -> Result<Option<ConversionResult>, ConvertError> {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    let markdown = if is_html(content) {
        debug!(bytes = content.len(), "normalizing HTML input to Markdown");
        html_to_markdown(content)?
    } else {
        content.to_string()
    };

    let mut renderer = SsmlRenderer::new(phrases);
    let ssml = render_markdown(&markdown, &mut renderer);
    let (links, thumb_html) = renderer.into_references().into_parts();

    debug!(
        links = links.len(),
        previews = thumb_html.len(),
        "converted content to SSML"
    );

    Ok(Some(ConversionResult {
        ssml,
        info: ConversionInfo { links, thumb_html },
    }))
}

/// Reusable conversion settings.
///
/// Holds configuration only; per-document state is created inside each [`convert`](Self::convert)
/// call, so one converter can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    phrases: Phrases,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phrases(phrases: Phrases) -> Self {
        Self { phrases }
    }

    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    pub fn convert(&self, content: Option<&str>) -> Result<Option<ConversionResult>, ConvertError> {
        md_to_ssml(content, &self.phrases)
    }
}
