//! Song records handed over by the app, and the notification metadata derived
//! from them.

use bridge_traits::NotificationMetadata;
use serde::{Deserialize, Serialize};

/// A track as the app's catalogue describes it.
///
/// Only the display fields matter to playback. Field names follow the app's
/// JSON records (`coverUrl`), so a record can be deserialized as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Secondary artwork field some catalogue sources fill instead of
    /// `cover_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            ..Self::default()
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_cover_url(mut self, url: impl Into<String>) -> Self {
        self.cover_url = Some(url.into());
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Artwork to show: `cover_url`, else `image`. Empty strings count as
    /// missing.
    pub fn artwork_url(&self) -> Option<&str> {
        non_empty(&self.cover_url).or_else(|| non_empty(&self.image))
    }

    /// Build notification metadata, substituting `default_album` when the
    /// song has no album.
    pub fn notification_metadata(&self, default_album: &str) -> NotificationMetadata {
        NotificationMetadata {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: non_empty(&self.album).unwrap_or(default_album).to_string(),
            artwork_url: self.artwork_url().map(str::to_string),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
