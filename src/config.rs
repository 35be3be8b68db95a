//! Configuration for the wheel
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/hackroulette/config.toml, or --config)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::wheel::layout::DEFAULT_MAX_LINES;
use crate::wheel::physics::{
    DEFAULT_FRICTION, DEFAULT_MIN_VELOCITY, DEFAULT_SPIN_MAX, DEFAULT_SPIN_MIN,
};
use crate::wheel::{PhysicsParams, SpinRange, WheelError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid [physics] section: {0}")]
    Physics(#[from] WheelError),

    #[error("invalid [display] section: {0}")]
    Display(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Friction law and kick range, in degrees per tick
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    pub friction: f64,
    pub min_velocity: f64,
    pub min_spin: f64,
    pub max_spin: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            min_velocity: DEFAULT_MIN_VELOCITY,
            min_spin: DEFAULT_SPIN_MIN,
            max_spin: DEFAULT_SPIN_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Milliseconds between physics ticks (16 ≈ 60 FPS)
    pub tick_rate_ms: u64,
    /// Maximum lines per wheel label
    pub label_lines: usize,
    /// Label distance from the centre as a fraction of the radius
    pub anchor_fraction: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            label_lines: DEFAULT_MAX_LINES,
            anchor_fraction: 0.55,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter level when RUST_LOG is unset
    pub level: String,
    /// Write logs to a daily rolling file (the only log sink while the TUI is up)
    pub file_enabled: bool,
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: true,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub physics: Option<FilePhysics>,
    pub display: Option<FileDisplay>,
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FilePhysics {
    pub friction: Option<f64>,
    pub min_velocity: Option<f64>,
    pub min_spin: Option<f64>,
    pub max_spin: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileDisplay {
    pub tick_rate_ms: Option<u64>,
    pub label_lines: Option<usize>,
    pub anchor_fraction: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
}

impl PhysicsConfig {
    fn from_file(file: Option<FilePhysics>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            friction: file.friction.unwrap_or(defaults.friction),
            min_velocity: file.min_velocity.unwrap_or(defaults.min_velocity),
            min_spin: file.min_spin.unwrap_or(defaults.min_spin),
            max_spin: file.max_spin.unwrap_or(defaults.max_spin),
        }
    }
}

impl DisplayConfig {
    fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            tick_rate_ms: file.tick_rate_ms.unwrap_or(defaults.tick_rate_ms),
            label_lines: file.label_lines.unwrap_or(defaults.label_lines),
            anchor_fraction: file.anchor_fraction.unwrap_or(defaults.anchor_fraction),
        }
    }
}

impl LoggingConfig {
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();
        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file.file_dir.map(PathBuf::from).unwrap_or(defaults.file_dir),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// ~/.config/hackroulette/config.toml on every platform
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("hackroulette").join("config.toml"))
    }

    /// Load from `path` (or the default location), then apply env overrides.
    ///
    /// A missing default file means defaults. An explicit path that does not
    /// exist, or any file that fails to parse, is an error: a broken config
    /// should fail fast instead of silently falling back.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Self::read_file_config(path, true)?,
            None => match Self::config_path() {
                Some(path) => Self::read_file_config(&path, false)?,
                None => FileConfig::default(),
            },
        };

        let mut config = Self::from_file_config(file);
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn read_file_config(path: &Path, required: bool) -> Result<FileConfig, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(FileConfig::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub(crate) fn from_file_config(file: FileConfig) -> Self {
        Self {
            physics: PhysicsConfig::from_file(file.physics),
            display: DisplayConfig::from_file(file.display),
            logging: LoggingConfig::from_file(file.logging),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents).map(Self::from_file_config)
    }

    fn apply_env(&mut self) {
        if let Ok(level) = std::env::var("HACKROULETTE_LOG") {
            self.logging.level = level;
        }
        if let Some(ms) = std::env::var("HACKROULETTE_TICK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.display.tick_rate_ms = ms;
        }
    }

    /// Check every value the wheel will later insist on, so a bad file is
    /// reported at startup rather than on the first spin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics_params()?;
        self.spin_range()?;
        if self.display.tick_rate_ms == 0 {
            return Err(ConfigError::Display("tick_rate_ms must be at least 1".to_string()));
        }
        if self.display.label_lines == 0 {
            return Err(ConfigError::Display("label_lines must be at least 1".to_string()));
        }
        if !(self.display.anchor_fraction > 0.0 && self.display.anchor_fraction <= 1.0) {
            return Err(ConfigError::Display(format!(
                "anchor_fraction must lie in (0, 1], got {}",
                self.display.anchor_fraction
            )));
        }
        Ok(())
    }

    pub fn physics_params(&self) -> Result<PhysicsParams, WheelError> {
        PhysicsParams::new(self.physics.friction, self.physics.min_velocity)
    }

    pub fn spin_range(&self) -> Result<SpinRange, WheelError> {
        SpinRange::new(self.physics.min_spin, self.physics.max_spin)
    }

    /// Effective configuration as a TOML document, suitable as a config file.
    pub fn to_toml(&self) -> String {
        format!(
            "# hackroulette configuration\n\
             \n\
             [physics]\n\
             # Per-tick velocity multiplier, strictly between 0 and 1\n\
             friction = {:?}\n\
             # Below this speed (degrees/tick) the wheel stops\n\
             min_velocity = {:?}\n\
             # Initial speed is drawn uniformly from min_spin..=max_spin\n\
             min_spin = {:?}\n\
             max_spin = {:?}\n\
             \n\
             [display]\n\
             tick_rate_ms = {}\n\
             label_lines = {}\n\
             anchor_fraction = {:?}\n\
             \n\
             [logging]\n\
             level = {:?}\n\
             file_enabled = {}\n\
             file_dir = {:?}\n",
            self.physics.friction,
            self.physics.min_velocity,
            self.physics.min_spin,
            self.physics.max_spin,
            self.display.tick_rate_ms,
            self.display.label_lines,
            self.display.anchor_fraction,
            self.logging.level,
            self.logging.file_enabled,
            self.logging.file_dir.display().to_string(),
        )
    }
}
