//! # Playback Façade
//!
//! Single-track playback control surface over a host [`NativeAudio`] backend.
//!
//! Every command addresses the façade's one [`TrackSlot`]. On hosts where
//! [`PlatformInfo::is_native_platform`] is `false` the commands return
//! immediately without touching the backend. Backend failures are logged and
//! swallowed: commands never return an error, and the two position queries
//! fall back to `0.0` (the `try_*` variants keep the distinction).
//!
//! ```ignore
//! use core_playback::{PlaybackConfig, PlaybackFacade, Song};
//! use bridge_traits::StaticPlatform;
//!
//! let facade = PlaybackFacade::new(backend, &StaticPlatform::native("android"), PlaybackConfig::default())?;
//! facade.initialize().await;
//! facade.play(&Song::new("Nights", "Frank Ocean"), "https://cdn.example.com/nights.mp3").await;
//! facade.set_volume(40.0).await;
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use bridge_traits::{ConfigureOptions, LogLevel, NativeAudio, PlatformInfo, PreloadOptions};
use core_runtime::logging::redact_url;
use tracing::{debug, info};

use crate::config::PlaybackConfig;
use crate::error::{PlaybackError, Result};
use crate::guard::log_and_continue;
use crate::slot::TrackSlot;
use crate::song::Song;

/// Convert a 0-100 volume into the backend's 0.0-1.0 scale.
///
/// Out-of-range input is clamped; NaN maps to silence.
pub fn volume_from_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0)
}

/// Playback control surface over a native audio backend.
pub struct PlaybackFacade {
    backend: Arc<dyn NativeAudio>,
    is_native: bool,
    platform: String,
    slot: TrackSlot,
    config: PlaybackConfig,
}

impl fmt::Debug for PlaybackFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackFacade")
            .field("backend", &"NativeAudio { ... }")
            .field("is_native", &self.is_native)
            .field("platform", &self.platform)
            .field("slot", &self.slot)
            .field("config", &self.config)
            .finish()
    }
}

impl PlaybackFacade {
    /// Create a façade. The native-host check runs once here and is fixed for
    /// the façade's lifetime.
    pub fn new(
        backend: Arc<dyn NativeAudio>,
        platform: &dyn PlatformInfo,
        config: PlaybackConfig,
    ) -> Result<Self> {
        config.validate()?;

        let is_native = platform.is_native_platform();
        debug!(
            platform = platform.platform_name(),
            is_native,
            slot = %config.slot_id,
            "Playback façade created"
        );

        Ok(Self {
            backend,
            is_native,
            platform: platform.platform_name().to_string(),
            slot: TrackSlot::new(config.asset_id()),
            config,
        })
    }

    /// Whether commands reach the backend.
    pub fn is_native(&self) -> bool {
        self.is_native
    }

    pub fn platform_name(&self) -> &str {
        &self.platform
    }

    pub fn slot(&self) -> &TrackSlot {
        &self.slot
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    /// Configure the backend's audio session (focus, background playback,
    /// notification, fades).
    pub async fn initialize(&self) {
        if !self.is_native {
            return;
        }

        let options = ConfigureOptions::from(self.config.session);
        self.guarded("initialize", async {
            self.backend.configure(options).await?;
            info!(platform = %self.platform, "Native audio configured");
            Ok(())
        })
        .await;
    }

    /// Replace whatever is in the slot with `audio_url` and start it at the
    /// configured start volume.
    ///
    /// The previous asset is unloaded best-effort first. After that the first
    /// failing step (preload, play, volume) ends the call.
    pub async fn play(&self, song: &Song, audio_url: &str) {
        if !self.is_native {
            return;
        }

        self.guarded("play", self.load_and_start(song, audio_url))
            .await;
    }

    async fn load_and_start(&self, song: &Song, audio_url: &str) -> Result<()> {
        let asset = self.slot.id();

        // An empty slot rejects the unload; that must not stop the new load.
        match self.backend.unload(asset).await {
            Ok(()) => self.slot.mark_empty(),
            Err(err) => {
                let err = PlaybackError::from(err);
                if err.is_not_loaded() {
                    self.slot.mark_empty();
                }
                debug!(slot = %asset, error = %err, "Ignoring unload failure before preload");
            }
        }

        let options = PreloadOptions {
            asset_id: asset.clone(),
            asset_path: audio_url.to_string(),
            audio_channel_num: self.config.audio_channel_num,
            is_url: true,
            notification_metadata: Some(song.notification_metadata(&self.config.default_album)),
        };

        info!(
            title = %song.title,
            artist = %song.artist,
            source = redact_url(audio_url),
            "Loading track"
        );
        self.backend.preload(options).await?;
        self.slot.mark_loaded(audio_url);

        self.backend.play(asset).await?;
        self.backend
            .set_volume(asset, self.config.start_volume)
            .await?;

        Ok(())
    }

    pub async fn pause(&self) {
        if !self.is_native {
            return;
        }

        self.guarded("pause", async {
            self.backend.pause(self.slot.id()).await?;
            Ok(())
        })
        .await;
    }

    pub async fn resume(&self) {
        if !self.is_native {
            return;
        }

        self.guarded("resume", async {
            self.backend.resume(self.slot.id()).await?;
            Ok(())
        })
        .await;
    }

    /// Stop playback and release the slot.
    ///
    /// The unload runs even when the stop fails, so the slot never keeps a
    /// stale asset around after a stop.
    pub async fn stop(&self) {
        if !self.is_native {
            return;
        }

        let asset = self.slot.id();

        self.guarded("stop", async {
            self.backend.stop(asset).await?;
            Ok(())
        })
        .await;

        self.guarded("unload", async {
            match self.backend.unload(asset).await {
                Ok(()) => {
                    self.slot.mark_empty();
                    Ok(())
                }
                Err(err) => {
                    let err = PlaybackError::from(err);
                    if err.is_not_loaded() {
                        self.slot.mark_empty();
                    }
                    Err(err)
                }
            }
        })
        .await;
    }

    /// Set volume on a 0-100 scale. See [`volume_from_percent`].
    pub async fn set_volume(&self, percent: f32) {
        if !self.is_native {
            return;
        }

        let volume = volume_from_percent(percent);
        self.guarded("set_volume", async {
            self.backend.set_volume(self.slot.id(), volume).await?;
            Ok(())
        })
        .await;
    }

    /// Jump to an absolute position in seconds.
    pub async fn seek(&self, seconds: f64) {
        if !self.is_native {
            return;
        }

        self.guarded("seek", async {
            self.backend.set_current_time(self.slot.id(), seconds).await?;
            Ok(())
        })
        .await;
    }

    /// Track duration in seconds, or `0.0` when unavailable.
    pub async fn get_duration(&self) -> f64 {
        self.quiet("get_duration", self.try_duration())
            .await
            .unwrap_or(0.0)
    }

    /// Playback position in seconds, or `0.0` when unavailable.
    pub async fn get_current_time(&self) -> f64 {
        self.quiet("get_current_time", self.try_current_time())
            .await
            .unwrap_or(0.0)
    }

    /// Track duration in seconds, keeping the reason when there is none.
    pub async fn try_duration(&self) -> Result<f64> {
        if !self.is_native {
            return Err(PlaybackError::NotNativeHost);
        }
        Ok(self.backend.get_duration(self.slot.id()).await?)
    }

    /// Playback position in seconds, keeping the reason when there is none.
    pub async fn try_current_time(&self) -> Result<f64> {
        if !self.is_native {
            return Err(PlaybackError::NotNativeHost);
        }
        Ok(self.backend.get_current_time(self.slot.id()).await?)
    }

    async fn guarded<T, F>(&self, operation: &'static str, future: F) -> Option<T>
    where
        F: Future<Output = Result<T>>,
    {
        log_and_continue(operation, self.slot.id(), LogLevel::Error, future).await
    }

    // Position queries are polled by the UI, often against an empty slot.
    async fn quiet<T, F>(&self, operation: &'static str, future: F) -> Option<T>
    where
        F: Future<Output = Result<T>>,
    {
        if !self.is_native {
            return None;
        }
        log_and_continue(operation, self.slot.id(), LogLevel::Debug, future).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_from_percent() {
        let inputs = [-50.0, 0.0, 50.0, 100.0, 150.0];
        let expected = [0.0, 0.0, 0.5, 1.0, 1.0];
        for (input, want) in inputs.iter().zip(expected.iter()) {
            assert_eq!(volume_from_percent(*input), *want, "input {}", input);
        }
    }

    #[test]
    fn test_volume_from_percent_edge_values() {
        assert_eq!(volume_from_percent(f32::NAN), 0.0);
        assert_eq!(volume_from_percent(f32::INFINITY), 1.0);
        assert_eq!(volume_from_percent(f32::NEG_INFINITY), 0.0);
        assert!((volume_from_percent(33.0) - 0.33).abs() < 1e-6);
    }
}
