//! Background-music envelopes
//!
//! A spoken fragment is laid over a background track with a SMIL-style parallel media
//! group: the speech starts `intro_sec` into the track, the track keeps playing
//! `afterglow_sec` after the speech ends and then fades out over `fadeout_sec`.
//!
//! ```text
//! <par>
//!   <media xml:id="bgm_ID" begin="7s">…speech…</media>
//!   <media end="bgm_ID.end+7s" fadeOutDur="3s" soundLevel="-10dB"><audio src="…"/></media>
//! </par>
//! ```
//!
//! `soundLevel` is a project convention post-processed into the synthesizer's own levels.

use crate::markup::escape_attr;
use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of generated media ids.
pub const MEDIA_ID_LEN: usize = 6;

/// Timing envelope of one background track.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AudioSpec {
    pub url: String,
    pub intro_sec: f64,
    pub afterglow_sec: f64,
    pub fadeout_sec: f64,
    /// Relative level in dB.
    pub sound_level: f64,
}

impl AudioSpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_intro(mut self, seconds: f64) -> Self {
        self.intro_sec = seconds;
        self
    }

    pub fn with_afterglow(mut self, seconds: f64) -> Self {
        self.afterglow_sec = seconds;
        self
    }

    pub fn with_fadeout(mut self, seconds: f64) -> Self {
        self.fadeout_sec = seconds;
        self
    }

    pub fn with_sound_level(mut self, db: f64) -> Self {
        self.sound_level = db;
        self
    }
}

/// Source of identifiers naming the speech element of an envelope.
///
/// Ids end up in `xml:id`, so they must be alphanumeric (no hyphens).
pub trait MediaIdSource {
    fn next_id(&mut self) -> String;
}

/// Random alphanumeric ids. Collisions within one document are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMediaIds;

impl MediaIdSource for RandomMediaIds {
    fn next_id(&mut self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(MEDIA_ID_LEN)
            .map(char::from)
            .collect()
    }
}

/// Wrap `content` and a background track into a parallel media group.
pub fn add_bgm<S: MediaIdSource + ?Sized>(content: &str, audio: &AudioSpec, ids: &mut S) -> String {
    let id = format!("bgm_{}", ids.next_id());
    format!(
        concat!(
            r#"<par>"#,
            r#"<media xml:id="{id}" begin="{intro}s">{content}</media>"#,
            r#"<media end="{id}.end+{afterglow}s" fadeOutDur="{fadeout}s" soundLevel="{level}dB">"#,
            r#"<audio src="{url}"/>"#,
            r#"</media>"#,
            r#"</par>"#
        ),
        id = id,
        intro = audio.intro_sec,
        content = content,
        afterglow = audio.afterglow_sec,
        fadeout = audio.fadeout_sec,
        level = signed_level(audio.sound_level),
        url = escape_attr(&audio.url),
    )
}

/// Non-negative levels carry an explicit `+`.
fn signed_level(level: f64) -> String {
    if level >= 0.0 {
        format!("+{}", level.abs())
    } else {
        level.to_string()
    }
}
