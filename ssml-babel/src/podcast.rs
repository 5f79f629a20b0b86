//! Podcast episode composition
//!
//! An episode is one `<speak>` document made of three parts:
//!
//! 1. Opening: channel title and description, the spoken publish date and the episode
//!    title, laid over the opening theme.
//! 2. Body: the episode description converted with [`md_to_ssml`].
//! 3. Ending (optional): the channel's closing remarks laid over the closing theme.
//!
//! Theme tracks and the date pattern come from [`PodcastOptions`]; nothing here hard-codes
//! a track address.

use crate::bgm::{add_bgm, AudioSpec, MediaIdSource};
use crate::convert::{md_to_ssml, ConversionInfo, ConversionResult};
use crate::error::ConvertError;
use crate::markup::escape_text;
use crate::ssml::Phrases;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::debug;

/// Default pattern for the spoken publish date, e.g. `2021年3月4日 9時5分`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y年%-m月%-d日 %-H時%-M分";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub title: String,
    pub description: String,
    /// Closing remarks in Markdown or HTML.
    #[serde(default)]
    pub ending_md: Option<String>,
}

/// One episode to compose.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastContent {
    #[serde(default)]
    pub channel: Option<Channel>,
    pub title: String,
    /// Episode body in Markdown, HTML or plain text.
    pub desc_md_or_html_or_text: String,
    pub publish_date: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PodcastOptions {
    pub opening: AudioSpec,
    pub ending: AudioSpec,
    /// chrono strftime pattern for the spoken publish date.
    pub date_format: String,
    pub phrases: Phrases,
}

impl PodcastOptions {
    pub fn new(opening: AudioSpec, ending: AudioSpec) -> Self {
        Self {
            opening,
            ending,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            phrases: Phrases::default(),
        }
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn with_phrases(mut self, phrases: Phrases) -> Self {
        self.phrases = phrases;
        self
    }
}

/// Compose a full episode document.
///
/// `info` carries the links and previews of the body only.
pub fn compose_podcast<S: MediaIdSource + ?Sized>(
    content: &PodcastContent,
    options: &PodcastOptions,
    ids: &mut S,
) -> Result<ConversionResult, ConvertError> {
    let opening = opening_ssml(content, options, ids)?;

    let body = md_to_ssml(
        Some(content.desc_md_or_html_or_text.as_str()),
        &options.phrases,
    )?;
    let (body, info) = match body {
        Some(result) => (result.ssml, result.info),
        None => (String::new(), ConversionInfo::default()),
    };

    let ending = ending_ssml(content, options, ids)?.unwrap_or_default();

    debug!(
        title = %content.title,
        links = info.links.len(),
        has_ending = !ending.is_empty(),
        "composed podcast episode"
    );

    Ok(ConversionResult {
        ssml: format!("<speak>{opening}{body}{ending}</speak>"),
        info,
    })
}

/// Opening section: channel header, date and title over the opening theme, then a pause.
pub fn opening_ssml<S: MediaIdSource + ?Sized>(
    content: &PodcastContent,
    options: &PodcastOptions,
    ids: &mut S,
) -> Result<String, ConvertError> {
    let mut inner = String::new();
    if let Some(channel) = &content.channel {
        if !channel.title.is_empty() {
            inner.push_str(&format!(
                r#"<emphasis level="strong">{}</emphasis><break time="1s"/>"#,
                escape_text(&channel.title)
            ));
        }
        if !channel.description.is_empty() {
            inner.push_str(&format!(
                r#"{}<break time="3s"/>"#,
                escape_text(&channel.description)
            ));
        }
    }
    let date = spoken_date(&content.publish_date, &options.date_format)?;
    inner.push_str(&format!(r#"{}<break time="0.5s"/>"#, escape_text(&date)));
    inner.push_str(&format!(
        r#"<emphasis level="strong">{}</emphasis>"#,
        escape_text(&content.title)
    ));

    let envelope = add_bgm(&format!("<speak>{inner}</speak>"), &options.opening, ids);
    Ok(format!(r#"{envelope}<break time="3s"/>"#))
}

/// Ending section, if the channel has closing remarks that render to something.
pub fn ending_ssml<S: MediaIdSource + ?Sized>(
    content: &PodcastContent,
    options: &PodcastOptions,
    ids: &mut S,
) -> Result<Option<String>, ConvertError> {
    let ending_md = content
        .channel
        .as_ref()
        .and_then(|channel| channel.ending_md.as_deref());

    let Some(result) = md_to_ssml(ending_md, &options.phrases)? else {
        return Ok(None);
    };
    if result.ssml.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(add_bgm(
        &format!("<speak>{}</speak>", result.ssml),
        &options.ending,
        ids,
    )))
}

/// Format a date for reading aloud. Invalid patterns are rejected instead of panicking.
pub fn spoken_date(date: &DateTime<FixedOffset>, pattern: &str) -> Result<String, ConvertError> {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ConvertError::DateFormat(pattern.to_string()));
    }
    Ok(date.format_with_items(items.iter()).to_string())
}
