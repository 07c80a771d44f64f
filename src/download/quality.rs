//! Selectable output qualities
//!
//! Four video resolution ceilings plus one audio-only extraction mode. The
//! token of an option is its label verbatim; it travels inside the callback
//! payload of the quality buttons.

use strum::{EnumIter, IntoEnumIterator};

/// Reserved prefix of quality-selection callback payloads.
pub const CALLBACK_PREFIX: &str = "res::";

/// Token of the audio extraction option.
pub const AUDIO_TOKEN: &str = "Audio (mp3)";

/// Kind of media a quality produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

/// One selectable output quality, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Quality {
    P1080,
    P720,
    P480,
    P360,
    AudioMp3,
}

impl Quality {
    /// Button label; doubles as the quality token.
    pub fn label(self) -> &'static str {
        match self {
            Quality::P1080 => "1080",
            Quality::P720 => "720",
            Quality::P480 => "480",
            Quality::P360 => "360",
            Quality::AudioMp3 => AUDIO_TOKEN,
        }
    }

    /// Token carried in the callback payload.
    pub fn token(self) -> &'static str {
        self.label()
    }

    /// Vertical resolution ceiling, `None` for audio extraction.
    pub fn max_height(self) -> Option<u32> {
        match self {
            Quality::P1080 => Some(1080),
            Quality::P720 => Some(720),
            Quality::P480 => Some(480),
            Quality::P360 => Some(360),
            Quality::AudioMp3 => None,
        }
    }

    pub fn media_kind(self) -> MediaKind {
        match self {
            Quality::AudioMp3 => MediaKind::Audio,
            _ => MediaKind::Video,
        }
    }

    pub fn is_audio(self) -> bool {
        self.media_kind() == MediaKind::Audio
    }

    /// Parses a quality token (exact label match).
    pub fn from_token(token: &str) -> Option<Self> {
        Quality::iter().find(|quality| quality.token() == token)
    }

    /// Callback payload of this option: the reserved prefix followed by the label.
    pub fn callback_data(self) -> String {
        format!("{}{}", CALLBACK_PREFIX, self.label())
    }

    /// Short notice shown when the download starts.
    pub fn downloading_notice(self) -> String {
        match self.max_height() {
            Some(height) => format!("Downloading in {}p...", height),
            None => "Downloading audio (mp3)...".to_string(),
        }
    }
}

/// A menu entry: what the user sees and what comes back in the callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityOption {
    pub label: String,
    pub token: String,
}

/// The fixed, ordered list of quality options.
pub fn quality_options() -> Vec<QualityOption> {
    Quality::iter()
        .map(|quality| QualityOption {
            label: quality.label().to_string(),
            token: quality.token().to_string(),
        })
        .collect()
}

/// Extracts the quality token from a callback payload.
///
/// Returns `None` when the payload does not carry the reserved prefix.
pub fn parse_callback_data(data: &str) -> Option<&str> {
    data.strip_prefix(CALLBACK_PREFIX)
}
