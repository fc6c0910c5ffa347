//! # Core Runtime Module
//!
//! Runtime infrastructure shared by the playback core and its bootstrap:
//! - Logging and tracing setup, with forwarding to a host `LoggerSink`
//! - Host application configuration
//!
//! ## Overview
//!
//! Nothing in here touches audio. The crate establishes the logging
//! conventions every other crate relies on (`tracing` events, filtered through
//! `tracing-subscriber`) and describes the host shell the core is embedded in.

pub mod config;
pub mod error;
pub mod logging;

pub use config::HostConfig;
pub use error::{Error, Result};
