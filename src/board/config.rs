//! Persisted application options.
//!
//! Only presentation/interaction options live here; the board itself is
//! seeded by the host each launch and is deliberately not persisted. The
//! file is TOML under the app root; an older JSON layout is migrated on
//! first load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Legacy filename for migration support.
pub const LEGACY_CONFIG_FILE_NAME: &str = "config.json";

/// Errors that may occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be resolved or created.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read an existing config file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The TOML config file did not parse.
    #[error("Failed to parse config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The legacy JSON config file did not parse.
    #[error("Failed to parse legacy config at {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Failed to serialize the config before writing it.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Interaction and presentation options persisted between launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    /// Render card rows at reduced height.
    #[serde(default)]
    pub compact_rows: bool,
    /// Show the introductory usage text above the board.
    #[serde(default = "default_true")]
    pub show_intro: bool,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            compact_rows: false,
            show_intro: true,
        }
    }
}

/// Top-level persisted configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub controls: InteractionOptions,
}

/// Load the config from the app root, falling back to defaults when no file
/// exists yet. A legacy JSON file is migrated to TOML on the way through.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from(&app_dirs::app_root_dir()?)
}

/// Persist the config to the app root.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to(&app_dirs::app_root_dir()?, config)
}

fn load_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    let toml_path = dir.join(CONFIG_FILE_NAME);
    if toml_path.is_file() {
        let raw = std::fs::read_to_string(&toml_path).map_err(|source| ConfigError::Read {
            path: toml_path.clone(),
            source,
        })?;
        return toml::from_str(&raw).map_err(|source| ConfigError::ParseToml {
            path: toml_path,
            source,
        });
    }

    let legacy_path = dir.join(LEGACY_CONFIG_FILE_NAME);
    if legacy_path.is_file() {
        let raw = std::fs::read_to_string(&legacy_path).map_err(|source| ConfigError::Read {
            path: legacy_path.clone(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::ParseJson {
                path: legacy_path.clone(),
                source,
            })?;
        save_to(dir, &config)?;
        info!(
            "Migrated legacy config {} to {}",
            legacy_path.display(),
            toml_path.display()
        );
        return Ok(config);
    }

    Ok(AppConfig::default())
}

fn save_to(dir: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let raw = toml::to_string_pretty(config)?;
    std::fs::write(&path, raw).map_err(|source| ConfigError::Write { path, source })
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = load_from(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.controls.show_intro);
    }

    #[test]
    fn toml_round_trip() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            controls: InteractionOptions {
                compact_rows: true,
                show_intro: false,
            },
        };
        save_to(dir.path(), &config).unwrap();
        assert_eq!(load_from(dir.path()).unwrap(), config);
    }

    #[test]
    fn legacy_json_is_migrated_to_toml() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(LEGACY_CONFIG_FILE_NAME),
            r#"{"controls":{"compact_rows":true,"show_intro":true}}"#,
        )
        .unwrap();
        let config = load_from(dir.path()).unwrap();
        assert!(config.controls.compact_rows);
        assert!(dir.path().join(CONFIG_FILE_NAME).is_file());
        // Subsequent loads read the migrated TOML.
        assert_eq!(load_from(dir.path()).unwrap(), config);
    }

    #[test]
    fn unknown_toml_keys_do_not_fail_the_load() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[controls]\ncompact_rows = true\n\n[future_section]\nx = 1\n",
        )
        .unwrap();
        let config = load_from(dir.path()).unwrap();
        assert!(config.controls.compact_rows);
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "controls = 3").unwrap();
        assert!(matches!(
            load_from(dir.path()),
            Err(ConfigError::ParseToml { .. })
        ));
    }
}
