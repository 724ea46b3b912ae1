// Configuration loading and parsing (flashquiz.toml).
//
// The config file is optional: when absent, built-in defaults apply. It
// only carries presentation knobs; question content is deliberately not
// configurable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast notification stays on screen, in milliseconds.
    pub toast_duration_ms: u64,
    /// Render loop tick interval, in milliseconds.
    pub render_tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            toast_duration_ms: 2500,
            render_tick_ms: 33,
        }
    }
}

impl UiConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms)
    }
}

/// Raw deserialization target for the entire flashquiz.toml file.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    ui: UiConfig,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the configuration.
///
/// Looks for `flashquiz.toml` in the current directory first, then in the
/// platform config directory (e.g. `~/.config/flashquiz/`). A missing
/// file is not an error; defaults apply.
pub fn load_config() -> Result<Config, ConfigError> {
    for path in candidate_paths() {
        if path.is_file() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Load and validate the config from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config { ui: file.ui };
    validate(&config)?;
    Ok(config)
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("flashquiz.toml")];
    if let Some(dirs) = ProjectDirs::from("", "", "flashquiz") {
        paths.push(dirs.config_dir().join("flashquiz.toml"));
    }
    paths
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.ui.render_tick_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.render_tick_ms".into(),
            message: "must be at least 1".into(),
        });
    }
    if config.ui.toast_duration_ms == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.toast_duration_ms".into(),
            message: "must be at least 1".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
        assert_eq!(config.ui.toast_duration_ms, 2500);
        assert_eq!(config.ui.render_tick_ms, 33);
    }

    #[test]
    fn duration_accessors() {
        let ui = UiConfig::default();
        assert_eq!(ui.toast_duration(), Duration::from_millis(2500));
        assert_eq!(ui.render_tick(), Duration::from_millis(33));
    }

    #[test]
    fn parse_full_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            [ui]
            toast_duration_ms = 1000
            render_tick_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(file.ui.toast_duration_ms, 1000);
        assert_eq!(file.ui.render_tick_ms, 50);
    }

    #[test]
    fn parse_partial_file_fills_defaults() {
        let file: ConfigFile = toml::from_str(
            r#"
            [ui]
            toast_duration_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(file.ui.toast_duration_ms, 1000);
        assert_eq!(file.ui.render_tick_ms, 33);
    }

    #[test]
    fn parse_empty_file_is_all_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file.ui.toast_duration_ms, 2500);
        assert_eq!(file.ui.render_tick_ms, 33);
    }

    #[test]
    fn zero_tick_fails_validation() {
        let config = Config {
            ui: UiConfig {
                toast_duration_ms: 2500,
                render_tick_ms: 0,
            },
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn zero_toast_duration_fails_validation() {
        let config = Config {
            ui: UiConfig {
                toast_duration_ms: 0,
                render_tick_ms: 33,
            },
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn load_from_missing_path_is_read_error() {
        let err = load_from_path(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
