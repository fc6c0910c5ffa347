//! # Playback Error Types
//!
//! Errors produced inside the façade. None of them reach callers of the
//! fire-and-forget commands; they surface only through the `try_*` queries and
//! the diagnostic log.

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors that can occur during playback operations.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The process is not running inside a native shell, so there is no
    /// backend to talk to.
    #[error("Native audio backend unavailable on this host")]
    NotNativeHost,

    /// The native backend rejected or failed the call.
    #[error("Native audio call failed: {0}")]
    Backend(#[from] BridgeError),

    /// Playback configuration failed validation.
    #[error("Invalid playback configuration: {0}")]
    InvalidConfig(String),
}

impl PlaybackError {
    /// Returns `true` if the backend reported that nothing is loaded in the
    /// slot. This is the expected outcome of unloading an empty slot.
    pub fn is_not_loaded(&self) -> bool {
        matches!(self, PlaybackError::Backend(BridgeError::AssetNotLoaded(_)))
    }

    /// Returns `true` if the error comes from the backend rather than from the
    /// façade's own checks.
    pub fn is_backend_error(&self) -> bool {
        matches!(self, PlaybackError::Backend(_))
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
