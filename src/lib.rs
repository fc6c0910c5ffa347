//! Workspace entry crate.
//!
//! Host applications depend on `hyde-audio` and pick a feature instead of
//! wiring each workspace crate by hand:
//!
//! - `service` (default): [`core_service`] bootstrap plus logging and host
//!   configuration from [`core_runtime`].
//! - `playback`: only the [`core_playback`] façade and its bridge contracts.

#[cfg(any(feature = "service", feature = "playback"))]
pub use bridge_traits;

#[cfg(all(feature = "playback", not(feature = "service")))]
pub use core_playback;

#[cfg(feature = "service")]
pub use core_runtime;

#[cfg(feature = "service")]
pub use core_service;

#[cfg(feature = "service")]
pub use core_service::core_playback;
