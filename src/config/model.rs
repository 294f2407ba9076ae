//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Where history, favorites, share exports, and logs live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory when set.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("teman-tuli")
        })
    }
}

/// Generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Artificial latency of the mock backend.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    #[serde(default = "default_video_url")]
    pub video_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: default_mock_delay_ms(),
            video_url: default_video_url(),
        }
    }
}

/// Client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub audio_enabled: bool,
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            history_cap: default_history_cap(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%d/%m/%Y %H:%M".to_string()
}
fn default_mock_delay_ms() -> u64 {
    2000
}
fn default_video_url() -> String {
    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4".to_string()
}
fn default_history_cap() -> usize {
    10
}
