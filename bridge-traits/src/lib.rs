//! # Host Bridge Traits
//!
//! Platform abstraction traits that each host shell must implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and the
//! platform-specific code around it. Each trait is a capability the core needs
//! but cannot provide itself:
//!
//! - [`NativeAudio`](playback::NativeAudio) - the native audio plugin that
//!   decodes, streams and renders audio and drives the media notification
//! - [`PlatformInfo`](platform::PlatformInfo) - whether the process runs inside
//!   a native shell where that plugin exists
//! - [`LoggerSink`](logging::LoggerSink) - forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | `NativeAudio` | `PlatformInfo` |
//! |----------|---------------|----------------|
//! | Android  | host plugin   | native         |
//! | iOS      | host plugin   | native         |
//! | Web      | not required  | non-native     |
//!
//! On non-native hosts the core never calls into `NativeAudio`, so a web build
//! may pass any implementation (typically one returning
//! [`BridgeError::NotAvailable`]).
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Implementations
//! should convert plugin errors into it and report an empty slot as
//! [`BridgeError::AssetNotLoaded`].
//!
//! ## Thread Safety
//!
//! Bridge traits require `Send + Sync` on native targets so implementations can
//! be shared across async tasks. On `wasm32` the bounds are dropped.

pub mod error;
pub mod logging;
pub mod platform;
pub mod playback;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use platform::{PlatformInfo, StaticPlatform};
pub use playback::{AssetId, ConfigureOptions, NativeAudio, NotificationMetadata, PreloadOptions};
