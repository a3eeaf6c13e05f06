// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast fade-in, hold and fade-out durations
//! - `[clipboard]` - Whether conversion results are copied
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_BASE64_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_base64::config;
//! use std::path::Path;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Write it to an explicit location
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::notifications::FadeSchedule;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast timing settings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_fade_in_ms", skip_serializing_if = "Option::is_none")]
    pub fade_in_ms: Option<u64>,

    #[serde(default = "default_hold_ms", skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    #[serde(default = "default_fade_out_ms", skip_serializing_if = "Option::is_none")]
    pub fade_out_ms: Option<u64>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: default_fade_in_ms(),
            hold_ms: default_hold_ms(),
            fade_out_ms: default_fade_out_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Builds the fade schedule, falling back to defaults for unset fields
    /// and clamping each phase to [`MAX_PHASE_MS`].
    #[must_use]
    pub fn schedule(&self) -> FadeSchedule {
        let clamp = |value: Option<u64>, default: u64| value.unwrap_or(default).min(MAX_PHASE_MS);
        FadeSchedule::from_millis(
            clamp(self.fade_in_ms, DEFAULT_FADE_IN_MS),
            clamp(self.hold_ms, DEFAULT_HOLD_MS),
            clamp(self.fade_out_ms, DEFAULT_FADE_OUT_MS),
        )
    }
}

/// Clipboard settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipboardConfig {
    /// Copy every successful conversion result to the clipboard.
    #[serde(
        default = "default_copy_results",
        skip_serializing_if = "Option::is_none"
    )]
    pub copy_results: Option<bool>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copy_results: default_copy_results(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_fade_in_ms() -> Option<u64> {
    Some(DEFAULT_FADE_IN_MS)
}

fn default_hold_ms() -> Option<u64> {
    Some(DEFAULT_HOLD_MS)
}

fn default_fade_out_ms() -> Option<u64> {
    Some(DEFAULT_FADE_OUT_MS)
}

fn default_copy_results() -> Option<bool> {
    Some(DEFAULT_COPY_RESULTS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded configuration from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationsConfig {
                fade_in_ms: Some(200),
                hold_ms: Some(3000),
                fade_out_ms: Some(250),
            },
            clipboard: ClipboardConfig {
                copy_results: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write file");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.notifications.fade_in_ms, Some(DEFAULT_FADE_IN_MS));
        assert_eq!(config.notifications.hold_ms, Some(DEFAULT_HOLD_MS));
        assert_eq!(config.notifications.fade_out_ms, Some(DEFAULT_FADE_OUT_MS));
        assert_eq!(config.clipboard.copy_results, Some(true));
    }

    #[test]
    fn default_schedule_is_half_second_fades_around_five_seconds() {
        let schedule = Config::default().notifications.schedule();
        assert_eq!(schedule, FadeSchedule::default());
        assert_eq!(schedule.total(), Duration::from_millis(6000));
    }

    #[test]
    fn schedule_fills_missing_fields_and_clamps() {
        let notifications = NotificationsConfig {
            fade_in_ms: None,
            hold_ms: Some(u64::MAX),
            fade_out_ms: Some(0),
        };
        let schedule = notifications.schedule();
        assert_eq!(schedule.fade_in, Duration::from_millis(DEFAULT_FADE_IN_MS));
        assert_eq!(schedule.hold, Duration::from_millis(MAX_PHASE_MS));
        assert_eq!(schedule.fade_out, Duration::ZERO);
    }

    #[test]
    fn partial_file_uses_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[notifications]\nhold_ms = 1000\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.notifications.hold_ms, Some(1000));
        assert_eq!(loaded.notifications.fade_in_ms, Some(DEFAULT_FADE_IN_MS));
        assert_eq!(loaded.clipboard.copy_results, Some(true));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn save_to_path_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save should succeed");
        assert!(base_dir.join("settings.toml").exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("[general]"), "should have [general] section");
        assert!(
            content.contains("[notifications]"),
            "should have [notifications] section"
        );
        assert!(content.contains("[clipboard]"), "should have [clipboard] section");
    }
}
