//! Engine configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window and render target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Render target width in pixels
    pub width: f32,
    /// Render target height in pixels
    pub height: f32,
    /// Whether to start in fullscreen
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "framekit".to_string(),
            width: 128.0,
            height: 128.0,
            fullscreen: false,
        }
    }
}

/// Input engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Number of player slots gamepads can be assigned to
    pub gamepad_slots: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { gamepad_slots: 64 }
    }
}

/// Text render cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Entries older than this many frames are released
    pub max_age: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { max_age: 2 }
    }
}

/// Asset location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory asset paths are resolved against
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Assets"),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub window: WindowConfig,
    pub input: InputConfig,
    pub text: TextConfig,
    pub assets: AssetsConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowConfig::default(),
            input: InputConfig::default(),
            text: TextConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration for the specified profile
    ///
    /// Sources, in increasing priority:
    /// 1. `config/{profile}.toml`, next to the executable or in the current directory
    /// 2. Environment variables with prefix APP_ (e.g., APP_INPUT__GAMEPAD_SLOTS=8)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        match Self::find_config_dir() {
            Some(dir) => Self::load_from_dir(&dir, profile),
            None => Self::build(Config::builder(), profile),
        }
    }

    /// Loads configuration for a profile from an explicit config directory
    pub fn load_from_dir(dir: &Path, profile: &str) -> Result<Self, ConfigError> {
        let profile_path = dir.join(profile);
        let builder =
            Config::builder().add_source(File::from(profile_path.as_path()).required(false));
        Self::build(builder, profile)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        profile: &str,
    ) -> Result<Self, ConfigError> {
        // Use __ as separator for nested fields (e.g., APP_WINDOW__TITLE)
        let config = builder
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        config.try_deserialize()
    }

    /// Finds the config directory next to the executable, then in the current directory
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_profile_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from_dir(dir.path(), "nothing-here").unwrap();

        assert_eq!(config.profile, "nothing-here");
        assert_eq!(config.input.gamepad_slots, 64);
        assert_eq!(config.text.max_age, 2);
        assert_eq!(config.assets.root, PathBuf::from("Assets"));
    }

    #[test]
    fn test_profile_file_overrides_sections() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("arcade.toml"),
            "[window]\nwidth = 320.0\nheight = 180.0\n\n[input]\ngamepad_slots = 4\n",
        )
        .unwrap();

        let config = EngineConfig::load_from_dir(dir.path(), "arcade").unwrap();

        assert_eq!(config.window.width, 320.0);
        assert_eq!(config.window.height, 180.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.window.title, "framekit");
        assert_eq!(config.input.gamepad_slots, 4);
        assert_eq!(config.text.max_age, 2);
    }
}
