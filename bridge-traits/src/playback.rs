//! Native audio bridge traits and supporting types.
//!
//! The core never decodes or mixes audio itself. A host application supplies a
//! [`NativeAudio`] implementation that forwards each call to the platform
//! audio plugin (ExoPlayer/MediaSession on Android, AVPlayer/MPNowPlaying on
//! iOS). Every control call is addressed by an [`AssetId`] naming the slot the
//! plugin keeps the decoded or streaming resource in.
//!
//! Option structs serialize with camelCase keys so a host can hand them to a
//! JSON plugin bridge without a translation layer.

use crate::{error::Result, platform::PlatformSendSync};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an asset slot inside the native backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One-time audio session setup passed to [`NativeAudio::configure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureOptions {
    /// Request audio focus (duck or pause other apps).
    pub focus: bool,
    /// Keep playing while the app is backgrounded.
    pub background: bool,
    /// Show the media notification / lock-screen controls.
    pub show_notification: bool,
    /// Fade in on play and fade out on stop.
    pub fade: bool,
}

/// Display metadata for the media notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
}

/// Arguments for [`NativeAudio::preload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreloadOptions {
    /// Slot the asset is loaded into.
    pub asset_id: AssetId,
    /// Local path or remote URL of the audio.
    pub asset_path: String,
    /// Number of concurrent channels the backend allocates for the asset.
    pub audio_channel_num: u32,
    /// `true` when `asset_path` is a URL rather than a bundled file.
    pub is_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_metadata: Option<NotificationMetadata>,
}

/// Platform audio engine.
///
/// Implementations own decoding, buffering, background playback and
/// notification integration. Errors are reported as
/// [`BridgeError`](crate::error::BridgeError); calls on a slot with nothing
/// loaded should prefer [`BridgeError::AssetNotLoaded`](crate::error::BridgeError::AssetNotLoaded).
///
/// Positions and durations are in seconds, volume is normalized to `0.0..=1.0`.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait NativeAudio: PlatformSendSync {
    /// Configure the audio session. Called once at startup.
    async fn configure(&self, options: ConfigureOptions) -> Result<()>;

    /// Load an asset into a slot, replacing whatever the backend held there.
    async fn preload(&self, options: PreloadOptions) -> Result<()>;

    /// Start playback of a loaded asset.
    async fn play(&self, asset: &AssetId) -> Result<()>;

    /// Pause without releasing the asset.
    async fn pause(&self, asset: &AssetId) -> Result<()>;

    /// Resume after [`pause`](Self::pause).
    async fn resume(&self, asset: &AssetId) -> Result<()>;

    /// Stop playback. The asset stays loaded until [`unload`](Self::unload).
    async fn stop(&self, asset: &AssetId) -> Result<()>;

    /// Release the asset and its native resources.
    async fn unload(&self, asset: &AssetId) -> Result<()>;

    async fn set_volume(&self, asset: &AssetId, volume: f32) -> Result<()>;

    /// Seek to an absolute position in seconds.
    async fn set_current_time(&self, asset: &AssetId, time: f64) -> Result<()>;

    async fn get_duration(&self, asset: &AssetId) -> Result<f64>;

    async fn get_current_time(&self, asset: &AssetId) -> Result<f64>;
}
