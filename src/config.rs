use crate::slider::model::HandleStyle;
use crate::slider::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Range and appearance of the slider, loadable from a TOML file with a
/// `RINGDIAL_*` environment overlay on top.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub initial_value: f64,
    pub line_width: f64,
    pub handle_radius: f64,
    pub radius: f64,
    pub handle_style: HandleStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM,
            maximum_value: DEFAULT_MAXIMUM,
            initial_value: DEFAULT_MINIMUM,
            line_width: 12.0,
            handle_radius: 14.0,
            radius: 120.0,
            handle_style: HandleStyle::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "ringdial", "ringdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path_override: Option<&Path>) -> Result<SliderConfig, ConfigError> {
    let config_path = match path_override {
        Some(p) => p.to_path_buf(),
        None => get_config_path()?,
    };

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("RINGDIAL"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_setup(path_override: Option<&Path>) -> SliderConfig {
    match load_config(path_override) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            SliderConfig::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Watches the config file's directory and signals a reload on changes.
pub async fn run_async_watcher(tx: Sender<AppEvent>, path_override: Option<PathBuf>) {
    let config_path = match path_override.map_or_else(get_config_path, Ok) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_style_deserialization() {
        let cases = vec![
            ("\"transparent\"", HandleStyle::Transparent),
            ("\"Transparent\"", HandleStyle::Transparent),
            ("\"TRANSPARENT\"", HandleStyle::Transparent),
            ("\"t\"", HandleStyle::Transparent),
            ("\"solid\"", HandleStyle::Solid),
            ("\"Solid\"", HandleStyle::Solid),
            ("\"s\"", HandleStyle::Solid),
        ];

        for (json, expected) in cases {
            let deserialized: HandleStyle = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config: SliderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.minimum_value, 0.0);
        assert_eq!(config.maximum_value, 100.0);
        assert_eq!(config.initial_value, 0.0);
        assert_eq!(config.handle_style, HandleStyle::Transparent);
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let config: SliderConfig =
            serde_json::from_str("{\"initial_value\": 25.0, \"handle_style\": \"solid\"}").unwrap();
        assert_eq!(config.initial_value, 25.0);
        assert_eq!(config.handle_style, HandleStyle::Solid);
        assert_eq!(config.maximum_value, 100.0);
        assert_eq!(config.line_width, 12.0);
    }

    #[test]
    fn test_default_config_file_parses() {
        let config: SliderConfig = toml_from_str(DEFAULT_CONFIG);
        assert!(config.maximum_value > config.minimum_value);
        assert!(config.radius > 0.0);
    }

    fn toml_from_str(s: &str) -> SliderConfig {
        config::Config::builder()
            .add_source(config::File::from_str(s, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
