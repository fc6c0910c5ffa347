//! # Playback Module
//!
//! Single-track playback control for the mobile app, delegated to the host's
//! native audio plugin.
//!
//! ## Overview
//!
//! This module handles:
//! - Forwarding play/pause/resume/stop/seek/volume commands to a
//!   [`NativeAudio`](bridge_traits::NativeAudio) backend
//! - Skipping every command when the host is not a native shell
//! - Logging and swallowing backend failures so UI callers never see them
//! - Building media-notification metadata from app [`Song`] records
//!
//! Decoding, buffering, background playback and lock-screen integration all
//! live in the backend.

pub mod config;
pub mod error;
pub mod facade;
mod guard;
pub mod slot;
pub mod song;

pub use config::{AudioSessionConfig, PlaybackConfig};
pub use error::{PlaybackError, Result};
pub use facade::{volume_from_percent, PlaybackFacade};
pub use slot::{SlotState, TrackSlot};
pub use song::Song;
