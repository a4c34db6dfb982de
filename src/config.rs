//! Settings file loading.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; a malformed one is an error.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::audio::DEFAULT_VOLUME;
use crate::error::SurveyError;
use crate::models::Restaurant;
use crate::screens::SurveyOptions;

const APP_DIR: &str = "survey-tui";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("volume must be between 0.0 and 1.0, got {0}")]
    Volume(f32),
    #[error(transparent)]
    Survey(#[from] SurveyError),
}

/// Raw file contents; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    start_unrated: Option<bool>,
    sound: Option<bool>,
    volume: Option<f32>,
    default_restaurant: Option<String>,
    log_filter: Option<String>,
}

/// Validated settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub start_unrated: bool,
    pub sound: bool,
    pub volume: f32,
    pub default_restaurant: Restaurant,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_unrated: false,
            sound: true,
            volume: DEFAULT_VOLUME,
            default_restaurant: Restaurant::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Default location of the settings file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        let defaults = Self::default();

        let volume = file.volume.unwrap_or(defaults.volume);
        if !(0.0..=1.0).contains(&volume) {
            return Err(ConfigError::Volume(volume));
        }
        let default_restaurant = match file.default_restaurant {
            Some(name) => name.parse()?,
            None => defaults.default_restaurant,
        };

        Ok(Self {
            start_unrated: file.start_unrated.unwrap_or(defaults.start_unrated),
            sound: file.sound.unwrap_or(defaults.sound),
            volume,
            default_restaurant,
            log_filter: file.log_filter.unwrap_or(defaults.log_filter),
        })
    }

    pub fn survey_options(&self) -> SurveyOptions {
        SurveyOptions {
            default_restaurant: self.default_restaurant,
            start_unrated: self.start_unrated,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.volume, 0.3);
        assert!(!settings.start_unrated);
    }

    #[test]
    fn test_load_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "start_unrated = true\nsound = false\nvolume = 0.5\ndefault_restaurant = \"Royal Palace\""
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.start_unrated);
        assert!(!settings.sound);
        assert_eq!(settings.volume, 0.5);
        assert_eq!(settings.default_restaurant, Restaurant::RoyalPalace);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_unknown_restaurant_rejected() {
        let err = Settings::from_toml("default_restaurant = \"Cabanas\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Survey(SurveyError::UnknownRestaurant(_))
        ));
    }

    #[test]
    fn test_volume_out_of_range_rejected() {
        assert!(matches!(
            Settings::from_toml("volume = 1.5"),
            Err(ConfigError::Volume(_))
        ));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "volume = \"loud\"").unwrap();
        match Settings::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(matches!(
            Settings::from_toml("colour = \"red\""),
            Err(ConfigError::Parse { .. })
        ));
    }
}
