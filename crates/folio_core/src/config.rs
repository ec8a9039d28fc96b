//! Runtime configuration.
//!
//! # Responsibility
//! - Merge built-in defaults, an optional JSON file and environment
//!   overrides into one validated [`FolioConfig`].
//!
//! # Invariants
//! - Precedence, lowest first: defaults, file, environment.
//! - A malformed override is an error; it never silently falls back.
//! - A config returned by [`FolioConfig::load`] has passed `validate`.

use crate::feedback::presets::{TonePreset, DEFAULT_CLICK_PRESET};
use crate::logging::normalize_level;
use crate::motion::scroll::ScrollAxis;
use crate::motion::spring::SpringConfig;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable naming the optional JSON config file.
pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG";
pub const ENV_MUSIC_VOLUME: &str = "FOLIO_MUSIC_VOLUME";
pub const ENV_CLICK_PRESET: &str = "FOLIO_CLICK_PRESET";
pub const ENV_HAPTIC_MS: &str = "FOLIO_HAPTIC_MS";
pub const ENV_ROAD_AXIS: &str = "FOLIO_ROAD_AXIS";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";

/// Configuration loading and validation errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Read { path: PathBuf, source: std::io::Error },
    /// Config file is not valid JSON for the config schema.
    Decode { path: PathBuf, source: serde_json::Error },
    /// A field or override holds an unusable value.
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode config `{}`: {source}", path.display())
            }
            Self::Invalid { field, message } => write!(f, "invalid `{field}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Background music volume in [0, 1].
    pub music_volume: f32,
    /// Host-resolved location of the looping background track.
    pub music_source: String,
    pub scroll_stiffness: f64,
    pub scroll_damping: f64,
    pub scroll_mass: f64,
    /// Preset played on selection and music toggles.
    pub click_preset: String,
    pub haptic_ms: u32,
    /// `vertical` or `horizontal`.
    pub road_axis: String,
    pub log_level: Option<String>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        let spring = SpringConfig::scroll();
        Self {
            music_volume: 0.4,
            music_source: "background-music.mp3".to_string(),
            scroll_stiffness: spring.stiffness,
            scroll_damping: spring.damping,
            scroll_mass: spring.mass,
            click_preset: DEFAULT_CLICK_PRESET.to_string(),
            haptic_ms: 10,
            road_axis: ScrollAxis::Vertical.as_str().to_string(),
            log_level: None,
        }
    }
}

impl FolioConfig {
    /// Loads configuration from `FOLIO_CONFIG` and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from);
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds a validated config from an optional file and an environment
    /// lookup.
    pub fn from_sources<F>(file: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Decodes a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(ENV_MUSIC_VOLUME) {
            self.music_volume = raw
                .trim()
                .parse::<f32>()
                .map_err(|err| ConfigError::invalid("music_volume", format!("`{raw}`: {err}")))?;
        }
        if let Some(raw) = env(ENV_CLICK_PRESET) {
            self.click_preset = raw.trim().to_string();
        }
        if let Some(raw) = env(ENV_HAPTIC_MS) {
            self.haptic_ms = raw
                .trim()
                .parse::<u32>()
                .map_err(|err| ConfigError::invalid("haptic_ms", format!("`{raw}`: {err}")))?;
        }
        if let Some(raw) = env(ENV_ROAD_AXIS) {
            self.road_axis = raw.trim().to_string();
        }
        if let Some(raw) = env(ENV_LOG_LEVEL) {
            self.log_level = Some(raw.trim().to_string());
        }
        Ok(())
    }

    /// Checks value ranges and names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.music_volume) {
            return Err(ConfigError::invalid(
                "music_volume",
                format!("{} is outside [0, 1]", self.music_volume),
            ));
        }
        for (field, value) in [
            ("scroll_stiffness", self.scroll_stiffness),
            ("scroll_damping", self.scroll_damping),
            ("scroll_mass", self.scroll_mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("{value} must be positive")));
            }
        }
        if TonePreset::by_name(&self.click_preset).is_none() {
            return Err(ConfigError::invalid(
                "click_preset",
                format!("unknown preset `{}`", self.click_preset),
            ));
        }
        if ScrollAxis::parse(&self.road_axis).is_none() {
            return Err(ConfigError::invalid(
                "road_axis",
                format!("`{}` is not vertical|horizontal", self.road_axis),
            ));
        }
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|message| ConfigError::invalid("log_level", message))?;
        }
        Ok(())
    }

    /// Spring constants for scroll smoothing.
    pub fn scroll_spring(&self) -> SpringConfig {
        SpringConfig::new(self.scroll_stiffness, self.scroll_damping, self.scroll_mass)
    }

    /// Parsed road axis; vertical when the stored value is unknown.
    pub fn axis(&self) -> ScrollAxis {
        ScrollAxis::parse(&self.road_axis).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FolioConfig, ENV_HAPTIC_MS, ENV_MUSIC_VOLUME, ENV_ROAD_AXIS};
    use crate::motion::scroll::ScrollAxis;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_validate() {
        let config = FolioConfig::from_sources(None, env_of(&[])).expect("defaults are valid");
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.click_preset, "thud");
        assert_eq!(config.music_volume, 0.4);
        assert_eq!(config.axis(), ScrollAxis::Vertical);
    }

    #[test]
    fn env_overrides_apply() {
        let config = FolioConfig::from_sources(
            None,
            env_of(&[(ENV_MUSIC_VOLUME, "0.8"), (ENV_ROAD_AXIS, "horizontal")]),
        )
        .expect("overrides are valid");
        assert_eq!(config.music_volume, 0.8);
        assert_eq!(config.axis(), ScrollAxis::Horizontal);
    }

    #[test]
    fn malformed_override_is_an_error() {
        let error = FolioConfig::from_sources(None, env_of(&[(ENV_HAPTIC_MS, "soon")]))
            .expect_err("non-numeric haptic duration must fail");
        assert!(matches!(error, ConfigError::Invalid { field: "haptic_ms", .. }));
    }

    #[test]
    fn rejects_out_of_range_volume() {
        let config = FolioConfig {
            music_volume: 1.5,
            ..FolioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "music_volume", .. })
        ));
    }
}
