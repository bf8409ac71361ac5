// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[splash]` - Splash screen duration
//! - `[scan]` - Timing of the simulated scanning sequence
//! - `[camera]` - Initial camera facing and flash state
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PLANT_IDENTIFIER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use plant_identifier::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::camera::Facing;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

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

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplashConfig {
    /// How long the splash stays up before onboarding (milliseconds).
    #[serde(
        default = "default_splash_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_ms: Option<u64>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_splash_timeout_ms(),
        }
    }
}

impl SplashConfig {
    /// Effective splash duration, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let ms = self
            .timeout_ms
            .unwrap_or(DEFAULT_SPLASH_TIMEOUT_MS)
            .clamp(MIN_SPLASH_TIMEOUT_MS, MAX_SPLASH_TIMEOUT_MS);
        Duration::from_millis(ms)
    }
}

/// Scanning sequence timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Delay between consecutive scanning steps (milliseconds).
    #[serde(
        default = "default_scan_step_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_delay_ms: Option<u64>,

    /// Delay between the final step and completion (milliseconds).
    #[serde(
        default = "default_scan_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub settle_delay_ms: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_scan_step_delay_ms(),
            settle_delay_ms: default_scan_settle_delay_ms(),
        }
    }
}

impl ScanConfig {
    /// Effective step delay, capped at [`MAX_SCAN_DELAY_MS`].
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(
            self.step_delay_ms
                .unwrap_or(DEFAULT_SCAN_STEP_DELAY_MS)
                .min(MAX_SCAN_DELAY_MS),
        )
    }

    /// Effective settle delay, capped at [`MAX_SCAN_DELAY_MS`].
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(
            self.settle_delay_ms
                .unwrap_or(DEFAULT_SCAN_SETTLE_DELAY_MS)
                .min(MAX_SCAN_DELAY_MS),
        )
    }
}

/// Camera settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CameraConfig {
    /// Camera used when the capture session is first configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_facing: Option<Facing>,

    /// Whether the flash starts enabled.
    #[serde(default = "default_flash", skip_serializing_if = "Option::is_none")]
    pub flash: Option<bool>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            default_facing: Some(Facing::default()),
            flash: default_flash(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Splash screen settings.
    #[serde(default)]
    pub splash: SplashConfig,

    /// Scanning sequence timing.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Camera settings.
    #[serde(default)]
    pub camera: CameraConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_splash_timeout_ms() -> Option<u64> {
    Some(DEFAULT_SPLASH_TIMEOUT_MS)
}

fn default_scan_step_delay_ms() -> Option<u64> {
    Some(DEFAULT_SCAN_STEP_DELAY_MS)
}

fn default_scan_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_SCAN_SETTLE_DELAY_MS)
}

fn default_flash() -> Option<bool> {
    Some(DEFAULT_FLASH_ENABLED)
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
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable {}: {}", path.display(), err);
                    return (Config::default(), Some("config-load-error".to_string()));
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            splash: SplashConfig {
                timeout_ms: Some(2_000),
            },
            scan: ScanConfig {
                step_delay_ms: Some(250),
                settle_delay_ms: Some(100),
            },
            camera: CameraConfig {
                default_facing: Some(Facing::Front),
                flash: Some(true),
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
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[scan]\nstep_delay_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[camera]\ndefault_facing = \"front\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.camera.default_facing, Some(Facing::Front));
        assert_eq!(loaded.camera.flash, Some(DEFAULT_FLASH_ENABLED));
        assert_eq!(loaded.splash, SplashConfig::default());
        assert_eq!(loaded.scan, ScanConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.splash.timeout(), Duration::from_millis(3_500));
        assert_eq!(config.scan.step_delay(), Duration::from_secs(1));
        assert_eq!(config.scan.settle_delay(), Duration::from_millis(500));
        assert_eq!(config.camera.default_facing, Some(Facing::Back));
        assert_eq!(config.camera.flash, Some(false));
    }

    #[test]
    fn splash_timeout_is_clamped() {
        let short = SplashConfig { timeout_ms: Some(1) };
        let long = SplashConfig {
            timeout_ms: Some(u64::MAX),
        };
        assert_eq!(short.timeout(), Duration::from_millis(MIN_SPLASH_TIMEOUT_MS));
        assert_eq!(long.timeout(), Duration::from_millis(MAX_SPLASH_TIMEOUT_MS));
    }

    #[test]
    fn load_with_override_reads_settings_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
