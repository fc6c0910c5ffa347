//! # Playback Façade Demo
//!
//! Drives the façade against a console backend that prints every native call,
//! the way the mobile shells' plugin would receive them.
//!
//! Run with: `cargo run --example playback_demo --package core-service`

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::{
    AssetId, ConfigureOptions, ConsoleLogger, LogLevel, NativeAudio, PreloadOptions,
    StaticPlatform,
};
use core_runtime::config::HostConfig;
use core_runtime::logging::{LogFormat, LoggingConfig};
use core_service::core_playback::{PlaybackConfig, Song};
use core_service::{bootstrap, CoreDependencies};
use std::sync::Arc;

struct ConsoleAudio;

#[async_trait]
impl NativeAudio for ConsoleAudio {
    async fn configure(&self, options: ConfigureOptions) -> Result<()> {
        println!("configure {:?}", options);
        Ok(())
    }

    async fn preload(&self, options: PreloadOptions) -> Result<()> {
        println!("preload {} <- {}", options.asset_id, options.asset_path);
        if let Some(metadata) = options.notification_metadata {
            println!("  notification: {} - {} ({})", metadata.artist, metadata.title, metadata.album);
        }
        Ok(())
    }

    async fn play(&self, asset: &AssetId) -> Result<()> {
        println!("play {}", asset);
        Ok(())
    }

    async fn pause(&self, asset: &AssetId) -> Result<()> {
        println!("pause {}", asset);
        Ok(())
    }

    async fn resume(&self, asset: &AssetId) -> Result<()> {
        println!("resume {}", asset);
        Ok(())
    }

    async fn stop(&self, asset: &AssetId) -> Result<()> {
        println!("stop {}", asset);
        Ok(())
    }

    async fn unload(&self, asset: &AssetId) -> Result<()> {
        println!("unload {}", asset);
        Ok(())
    }

    async fn set_volume(&self, asset: &AssetId, volume: f32) -> Result<()> {
        println!("set_volume {} {:.2}", asset, volume);
        Ok(())
    }

    async fn set_current_time(&self, asset: &AssetId, time: f64) -> Result<()> {
        println!("set_current_time {} {:.1}s", asset, time);
        Ok(())
    }

    async fn get_duration(&self, _asset: &AssetId) -> Result<f64> {
        Ok(215.0)
    }

    async fn get_current_time(&self, _asset: &AssetId) -> Result<f64> {
        Ok(42.0)
    }
}

#[tokio::main]
async fn main() -> core_service::Result<()> {
    let logging = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_logger_sink(Arc::new(ConsoleLogger::default()));

    let core = bootstrap(
        CoreDependencies::new(Arc::new(ConsoleAudio), Arc::new(StaticPlatform::native("android"))),
        HostConfig::default(),
        PlaybackConfig::default(),
        Some(logging),
    )?;
    core.start().await;

    let player = core.playback();
    let song = Song::new("Nights", "Frank Ocean").with_image("https://img.example.com/blonde.jpg");

    player.play(&song, "https://cdn.example.com/tracks/nights.mp3?token=secret").await;
    player.set_volume(65.0).await;
    player.seek(90.0).await;
    println!(
        "position {:.0}s / {:.0}s",
        player.get_current_time().await,
        player.get_duration().await
    );
    player.pause().await;
    player.resume().await;
    player.stop().await;

    Ok(())
}
