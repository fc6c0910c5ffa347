//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (native audio plugin,
//! platform detection, log sink) into the shared Rust core. A mobile shell
//! typically calls [`bootstrap`] once at launch, then [`CoreService::start`]
//! when the UI is ready, and keeps the returned [`PlaybackFacade`] for the
//! player controls.

pub mod error;

pub use error::{CoreError, Result};

pub use core_playback;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bridge_traits::{NativeAudio, PlatformInfo};
use core_playback::{PlaybackConfig, PlaybackFacade};
use core_runtime::config::HostConfig;
use core_runtime::logging::{init_logging, LoggingConfig};
use tracing::info;

/// Aggregated handle to all bridge dependencies the core requires.
pub struct CoreDependencies {
    pub audio: Arc<dyn NativeAudio>,
    pub platform: Arc<dyn PlatformInfo>,
}

impl CoreDependencies {
    /// Construct a dependency bundle from explicit bridge handles.
    pub fn new(audio: Arc<dyn NativeAudio>, platform: Arc<dyn PlatformInfo>) -> Self {
        Self { audio, platform }
    }
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    deps: Arc<CoreDependencies>,
    host: Arc<HostConfig>,
    playback: Arc<PlaybackFacade>,
    started: Arc<AtomicBool>,
}

impl CoreService {
    /// Validate the configuration and build the playback façade.
    pub fn new(
        deps: CoreDependencies,
        host: HostConfig,
        playback_config: PlaybackConfig,
    ) -> Result<Self> {
        host.validate()?;

        let playback = PlaybackFacade::new(
            Arc::clone(&deps.audio),
            deps.platform.as_ref(),
            playback_config,
        )?;

        info!(
            app_id = %host.app_id,
            platform = deps.platform.platform_name(),
            native = playback.is_native(),
            "Core service created"
        );

        Ok(Self {
            deps: Arc::new(deps),
            host: Arc::new(host),
            playback: Arc::new(playback),
            started: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Configure the native audio session. Only the first call on a service
    /// (or any of its clones) does anything.
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        self.playback.initialize().await;
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Shared playback façade.
    pub fn playback(&self) -> Arc<PlaybackFacade> {
        Arc::clone(&self.playback)
    }

    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    /// Access the bridge dependencies being used by the service.
    pub fn dependencies(&self) -> Arc<CoreDependencies> {
        Arc::clone(&self.deps)
    }
}

/// Install logging (when a config is given) and build the service.
///
/// ```ignore
/// use core_service::{bootstrap, CoreDependencies};
/// use core_runtime::{config::HostConfig, logging::LoggingConfig};
/// use core_playback::PlaybackConfig;
///
/// let core = bootstrap(
///     CoreDependencies::new(audio_plugin, platform),
///     HostConfig::default(),
///     PlaybackConfig::default(),
///     Some(LoggingConfig::default()),
/// )?;
/// core.start().await;
/// ```
pub fn bootstrap(
    deps: CoreDependencies,
    host: HostConfig,
    playback_config: PlaybackConfig,
    logging: Option<LoggingConfig>,
) -> Result<CoreService> {
    if let Some(logging) = logging {
        init_logging(logging)?;
    }
    CoreService::new(deps, host, playback_config)
}
