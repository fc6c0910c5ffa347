//! # Playback Configuration
//!
//! Settings for the playback façade: which backend slot it drives, how the
//! audio session is configured, and the defaults used when building
//! notification metadata.

use bridge_traits::{AssetId, ConfigureOptions};
use serde::{Deserialize, Serialize};

use crate::error::{PlaybackError, Result};

/// Audio session options applied once by
/// [`PlaybackFacade::initialize`](crate::PlaybackFacade::initialize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSessionConfig {
    /// Request audio focus from the OS.
    #[serde(default = "enabled")]
    pub focus: bool,

    /// Keep playing while the app is in the background.
    #[serde(default = "enabled")]
    pub background: bool,

    /// Show the media notification and lock-screen controls.
    #[serde(default = "enabled")]
    pub show_notification: bool,

    /// Fade in on play and out on stop.
    #[serde(default = "enabled")]
    pub fade: bool,
}

impl Default for AudioSessionConfig {
    fn default() -> Self {
        Self {
            focus: true,
            background: true,
            show_notification: true,
            fade: true,
        }
    }
}

impl From<AudioSessionConfig> for ConfigureOptions {
    fn from(config: AudioSessionConfig) -> Self {
        ConfigureOptions {
            focus: config.focus,
            background: config.background,
            show_notification: config.show_notification,
            fade: config.fade,
        }
    }
}

/// Playback façade configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Identifier of the single backend slot every command addresses.
    ///
    /// Default: `"currentSong"`.
    #[serde(default = "default_slot_id")]
    pub slot_id: String,

    /// Album shown in the notification when the song has none.
    ///
    /// Default: `"Single"`.
    #[serde(default = "default_album")]
    pub default_album: String,

    /// Channels the backend allocates per preloaded asset.
    ///
    /// Default: 1.
    #[serde(default = "default_audio_channel_num")]
    pub audio_channel_num: u32,

    /// Volume (0.0-1.0) forced right after playback starts.
    ///
    /// Default: 1.0.
    #[serde(default = "default_start_volume")]
    pub start_volume: f32,

    #[serde(default)]
    pub session: AudioSessionConfig,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            slot_id: default_slot_id(),
            default_album: default_album(),
            audio_channel_num: default_audio_channel_num(),
            start_volume: default_start_volume(),
            session: AudioSessionConfig::default(),
        }
    }
}

impl PlaybackConfig {
    /// Slot identifier as a backend [`AssetId`].
    pub fn asset_id(&self) -> AssetId {
        AssetId::new(self.slot_id.clone())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.slot_id.trim().is_empty() {
            return Err(PlaybackError::InvalidConfig(
                "slot_id cannot be empty".to_string(),
            ));
        }

        if self.audio_channel_num == 0 {
            return Err(PlaybackError::InvalidConfig(
                "audio_channel_num must be > 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.start_volume) {
            return Err(PlaybackError::InvalidConfig(
                "start_volume must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Default Functions (for serde)
// ============================================================================

fn enabled() -> bool {
    true
}

fn default_slot_id() -> String {
    "currentSong".to_string()
}

fn default_album() -> String {
    "Single".to_string()
}

fn default_audio_channel_num() -> u32 {
    1
}

fn default_start_volume() -> f32 {
    1.0
}
