//! # Host Configuration
//!
//! Identity of the host shell embedding the core: the mobile app id, its
//! display name and the directory the web bundle is served from. The mobile
//! shells ship this as JSON next to the bundle, so [`HostConfig::from_json`]
//! accepts the same camelCase keys.
//!
//! ```
//! use core_runtime::config::HostConfig;
//!
//! let config = HostConfig::from_json(
//!     r#"{ "appId": "com.hyde.music", "appName": "Hyde Music", "webDir": "dist" }"#,
//! )
//! .expect("valid host config");
//! assert_eq!(config.app_name, "Hyde Music");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Host application identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// Reverse-DNS bundle / package identifier (e.g. `com.hyde.music`).
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Name shown by the OS, including in the media notification.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Directory of the web assets bundled into the native shell.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            app_name: default_app_name(),
            web_dir: default_web_dir(),
        }
    }
}

impl HostConfig {
    /// Parse and validate a JSON host configuration. Missing keys fall back to
    /// the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HostConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid host configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn with_web_dir(mut self, web_dir: impl Into<String>) -> Self {
        self.web_dir = web_dir.into();
        self
    }

    /// Validates the configuration.
    ///
    /// This checks:
    /// - App id is reverse-DNS: at least two dot-separated segments, each made
    ///   of ASCII alphanumerics or underscores
    /// - App name is not blank
    /// - Web directory is not empty
    pub fn validate(&self) -> Result<()> {
        let segments: Vec<&str> = self.app_id.split('.').collect();
        let well_formed = segments.len() >= 2
            && segments.iter().all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_')
            });
        if !well_formed {
            return Err(Error::Config(format!(
                "App id '{}' must be a reverse-DNS identifier such as com.example.app",
                self.app_id
            )));
        }

        if self.app_name.trim().is_empty() {
            return Err(Error::Config("App name cannot be empty".to_string()));
        }

        if self.web_dir.is_empty() {
            return Err(Error::Config("Web directory cannot be empty".to_string()));
        }

        Ok(())
    }
}

fn default_app_id() -> String {
    "com.hyde.music".to_string()
}

fn default_app_name() -> String {
    "Hyde Music".to_string()
}

fn default_web_dir() -> String {
    "dist".to_string()
}
