// SPDX-License-Identifier: AGPL-3.0-or-later

//! Configuration file support
//!
//! wpak works without any configuration. An optional TOML file can rename the
//! external programs, change the notification timeout and volume limit, and
//! override the icon and menu prompt used for sinks and sources.
//!
//! Lookup order: an explicit `--config` path, then `wpak/config.toml` under
//! the platform config directory (`$XDG_CONFIG_HOME`, or `$HOME/.config`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WpakError};

/// Presentation overrides for one target (sinks or sources)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetOverrides {
    pub icon: Option<String>,
    pub prompt: Option<String>,
}

/// wpak configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Audio control program
    pub wpctl: String,
    /// Menu program, invoked in dmenu mode
    pub menu: String,
    /// Notification program
    pub notifier: String,
    pub notify_timeout_ms: u32,
    /// Upper bound passed to `wpctl set-volume -l`
    pub volume_limit: String,
    pub sink: TargetOverrides,
    pub source: TargetOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wpctl: "wpctl".into(),
            menu: "rofi".into(),
            notifier: "dunstify".into(),
            notify_timeout_ms: 1000,
            volume_limit: "1.0".into(),
            sink: TargetOverrides::default(),
            source: TargetOverrides::default(),
        }
    }
}

impl Config {
    /// Load from TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WpakError::Config(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| WpakError::Config(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration wpak should run with.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to [`Config::default`] when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::from_toml_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::from_toml_file(&path)
            }
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("wpctl", &self.wpctl),
            ("menu", &self.menu),
            ("notifier", &self.notifier),
        ] {
            if value.trim().is_empty() {
                return Err(WpakError::Config(format!("`{}` must not be empty", key)));
            }
        }

        match self.volume_limit.parse::<f64>() {
            Ok(limit) if limit.is_finite() && limit > 0.0 => Ok(()),
            _ => Err(WpakError::Config(format!(
                "`volume_limit` must be a positive number, got {:?}",
                self.volume_limit
            ))),
        }
    }

    /// Generate sample config
    pub fn sample_toml() -> String {
        r#"# wpak configuration
wpctl = "wpctl"
menu = "rofi"
notifier = "dunstify"
notify_timeout_ms = 1000
# Upper bound for `wpctl set-volume -l` (1.0 = 100%)
volume_limit = "1.0"

# [sink]
# icon = "󰓃"
# prompt = "sink"

# [source]
# icon = "󰍬"
# prompt = "source"
"#
        .into()
    }
}

/// Default config file location, under the platform config directory
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wpak").join("config.toml"))
}
