//! Bootstrap tests for the core service

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::{AssetId, ConfigureOptions, NativeAudio, PreloadOptions, StaticPlatform};
use core_runtime::config::HostConfig;
use core_service::core_playback::{PlaybackConfig, PlaybackError};
use core_service::{bootstrap, CoreDependencies, CoreError, CoreService};
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Audio {}

    #[async_trait::async_trait]
    impl NativeAudio for Audio {
        async fn configure(&self, options: ConfigureOptions) -> BridgeResult<()>;
        async fn preload(&self, options: PreloadOptions) -> BridgeResult<()>;
        async fn play(&self, asset: &AssetId) -> BridgeResult<()>;
        async fn pause(&self, asset: &AssetId) -> BridgeResult<()>;
        async fn resume(&self, asset: &AssetId) -> BridgeResult<()>;
        async fn stop(&self, asset: &AssetId) -> BridgeResult<()>;
        async fn unload(&self, asset: &AssetId) -> BridgeResult<()>;
        async fn set_volume(&self, asset: &AssetId, volume: f32) -> BridgeResult<()>;
        async fn set_current_time(&self, asset: &AssetId, time: f64) -> BridgeResult<()>;
        async fn get_duration(&self, asset: &AssetId) -> BridgeResult<f64>;
        async fn get_current_time(&self, asset: &AssetId) -> BridgeResult<f64>;
    }
}

fn deps(audio: MockAudio, platform: StaticPlatform) -> CoreDependencies {
    CoreDependencies::new(Arc::new(audio), Arc::new(platform))
}

#[tokio::test]
async fn test_start_configures_backend_once() {
    let mut audio = MockAudio::new();
    audio.expect_configure().times(1).returning(|_| Ok(()));

    let core = CoreService::new(
        deps(audio, StaticPlatform::native("android")),
        HostConfig::default(),
        PlaybackConfig::default(),
    )
    .unwrap();

    assert!(!core.is_started());
    core.start().await;
    core.clone().start().await;
    assert!(core.is_started());
}

#[tokio::test]
async fn test_web_host_skips_backend() {
    let core = CoreService::new(
        deps(MockAudio::new(), StaticPlatform::web()),
        HostConfig::default(),
        PlaybackConfig::default(),
    )
    .unwrap();

    core.start().await;

    let playback = core.playback();
    assert!(!playback.is_native());
    assert_eq!(playback.get_duration().await, 0.0);
    assert_eq!(core.dependencies().platform.platform_name(), "web");
}

#[tokio::test]
async fn test_playback_handle_is_shared() {
    let mut audio = MockAudio::new();
    audio
        .expect_get_current_time()
        .times(2)
        .returning(|_| Ok(12.0));

    let core = CoreService::new(
        deps(audio, StaticPlatform::native("ios")),
        HostConfig::default(),
        PlaybackConfig::default(),
    )
    .unwrap();

    let first = core.playback();
    let second = core.clone().playback();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.get_current_time().await, 12.0);
    assert_eq!(second.get_current_time().await, 12.0);
}

#[test]
fn test_invalid_host_config_rejected() {
    let result = CoreService::new(
        deps(MockAudio::new(), StaticPlatform::native("android")),
        HostConfig::default().with_app_id("hyde"),
        PlaybackConfig::default(),
    );
    assert!(matches!(result, Err(CoreError::Runtime(_))));
}

#[test]
fn test_invalid_playback_config_rejected() {
    let config = PlaybackConfig {
        audio_channel_num: 0,
        ..PlaybackConfig::default()
    };
    let result = bootstrap(
        deps(MockAudio::new(), StaticPlatform::native("android")),
        HostConfig::default(),
        config,
        None,
    );
    assert!(matches!(
        result,
        Err(CoreError::Playback(PlaybackError::InvalidConfig(_)))
    ));
}

#[test]
fn test_bootstrap_without_logging() {
    let core = bootstrap(
        deps(MockAudio::new(), StaticPlatform::native("android")),
        HostConfig::default().with_app_name("Hyde Music Beta"),
        PlaybackConfig::default(),
        None,
    )
    .unwrap();

    assert_eq!(core.host().app_name, "Hyde Music Beta");
    assert_eq!(core.playback().slot().id().as_str(), "currentSong");
}
