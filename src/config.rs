use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Smallest and largest puzzle the game offers
pub const MIN_BOARD_SIZE: u8 = 3;
pub const MAX_BOARD_SIZE: u8 = 5;

/// Main configuration structure
///
/// Holds the settings a player edits by hand. State the game writes by
/// itself (flags, statistics) lives in the preferences file instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Edge length of the sliding puzzle (3-5)
    #[serde(default = "default_board_size")]
    pub board_size: u8,
    /// Where preferences are stored (default: next to this file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_board_size() -> u8 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            board_size: default_board_size(),
            preferences_path: None,
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or create it with defaults
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            config.board_size = config.board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Theme to use, honoring the `NO_COLOR` convention
    pub fn theme_type(&self) -> ThemeType {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return ThemeType::NoColor;
        }
        self.theme.parse().unwrap_or_default()
    }

    /// Preferences file, defaulting to the standard location
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(crate::utils::get_preferences_path)
    }
}
