use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
}

/// Where snapshots come from and how often the host should poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Command the host runs to produce one JSON snapshot per poll.
    #[serde(default = "default_command")]
    pub command: PathBuf,
    /// Poll cadence in milliseconds.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
}

/// Cosmetic knobs the host renderer reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Proportional widget size in percent: 100 = default, 75 = 25% smaller.
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Pin the widget to the alternate (bottom) layout.
    #[serde(default)]
    pub alt_layout: bool,
}

impl WidgetConfig {
    /// Scale a base pixel value by the configured percentage.
    pub fn scale_px(&self, base: f32) -> f32 {
        base * self.scale as f32 / 100.0
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            refresh_ms: default_refresh_ms(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            alt_layout: false,
        }
    }
}

fn default_command() -> PathBuf {
    config_dir().join("get_track_metadata.sh")
}

fn default_refresh_ms() -> u64 {
    5000
}

fn default_scale() -> u32 {
    100
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nowplay")
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}
