//! Shared configuration loader for md2ssml.
//!
//! `defaults/ssml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SsmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use ssml_babel::{AudioSpec, Phrases, PodcastOptions};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/ssml.default.toml");

/// Top-level configuration consumed by md2ssml.
#[derive(Debug, Clone, Deserialize)]
pub struct SsmlConfig {
    pub phrases: PhrasesConfig,
    pub podcast: PodcastConfig,
}

/// Words spoken in place of links, images and checkboxes.
#[derive(Debug, Clone, Deserialize)]
pub struct PhrasesConfig {
    pub url_link: String,
    pub image_numbered: String,
    pub image_of: String,
    pub checked: String,
    pub unchecked: String,
}

impl From<PhrasesConfig> for Phrases {
    fn from(config: PhrasesConfig) -> Self {
        Phrases {
            url_link: config.url_link,
            image_numbered: config.image_numbered,
            image_of: config.image_of,
            checked: config.checked,
            unchecked: config.unchecked,
        }
    }
}

impl From<&PhrasesConfig> for Phrases {
    fn from(config: &PhrasesConfig) -> Self {
        config.clone().into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PodcastConfig {
    pub date_format: String,
    pub opening: TrackConfig,
    pub ending: TrackConfig,
}

/// One background track and its envelope timing.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackConfig {
    pub url: String,
    pub intro_sec: f64,
    pub afterglow_sec: f64,
    pub fadeout_sec: f64,
    pub sound_level: f64,
}

impl From<&TrackConfig> for AudioSpec {
    fn from(config: &TrackConfig) -> Self {
        AudioSpec::new(config.url.clone())
            .with_intro(config.intro_sec)
            .with_afterglow(config.afterglow_sec)
            .with_fadeout(config.fadeout_sec)
            .with_sound_level(config.sound_level)
    }
}

impl SsmlConfig {
    pub fn phrases(&self) -> Phrases {
        (&self.phrases).into()
    }

    /// Podcast options with this configuration's tracks, date pattern and phrases.
    pub fn podcast_options(&self) -> PodcastOptions {
        PodcastOptions::new(
            (&self.podcast.opening).into(),
            (&self.podcast.ending).into(),
        )
        .with_date_format(self.podcast.date_format.clone())
        .with_phrases(self.phrases())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SsmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SsmlConfig, ConfigError> {
    Loader::new().build()
}
