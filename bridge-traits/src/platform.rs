//! Platform-specific helper abstractions.
//!
//! Native targets require `Send + Sync` so bridge implementations can be
//! shared freely across async tasks. WebAssembly builds run on a single thread
//! and cannot satisfy those bounds because browser-provided objects are not
//! thread-safe, so the marker traits below make the bounds conditional without
//! duplicating every trait definition.
//!
//! This module also hosts [`PlatformInfo`], the capability the core consults to
//! decide whether a native audio backend is actually present.

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Marker trait equivalent to `Send` on native targets.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSend for T where T: Send {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSend {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSend for T {}

/// Host runtime detection.
///
/// A "native host" is an Android or iOS shell where the native audio plugin is
/// really installed. Plain browser or desktop previews report `false`, and the
/// core turns every playback command into a no-op there.
pub trait PlatformInfo: PlatformSendSync {
    /// Whether the native audio backend is available in this process.
    fn is_native_platform(&self) -> bool;

    /// Short platform label used in diagnostics (`"android"`, `"ios"`, `"web"`).
    fn platform_name(&self) -> &str;
}

/// [`PlatformInfo`] with a fixed answer.
///
/// Hosts that know their platform at startup (the mobile shells do) can pass
/// this instead of writing their own detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPlatform {
    name: String,
    native: bool,
}

impl StaticPlatform {
    /// A native host with the given label.
    pub fn native(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            native: true,
        }
    }

    /// A browser host; the native backend is never reachable.
    pub fn web() -> Self {
        Self {
            name: "web".to_string(),
            native: false,
        }
    }

    /// Label derived from the compile target. `target_os` values `android`
    /// and `ios` are treated as native, everything else is not.
    pub fn current() -> Self {
        let name = std::env::consts::OS;
        Self {
            name: name.to_string(),
            native: matches!(name, "android" | "ios"),
        }
    }
}

impl PlatformInfo for StaticPlatform {
    fn is_native_platform(&self) -> bool {
        self.native
    }

    fn platform_name(&self) -> &str {
        &self.name
    }
}
