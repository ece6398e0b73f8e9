//! Engine configuration
//!
//! Loaded from a TOML file when one is given, otherwise every field takes
//! its default. Defaults reproduce the reference session: 100 one-minute
//! ticks starting 2026-02-28T09:30:00Z, orders spread over 90 minutes.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use types::errors::RegistryError;

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Number of ticks per price series (>= 2)
    #[serde(default = "defaults::tick_count")]
    pub tick_count: usize,
    /// Spacing between consecutive ticks
    #[serde(default = "defaults::tick_interval_ms")]
    pub tick_interval_ms: i64,
    /// Timestamp of the first tick
    #[serde(default = "defaults::session_start")]
    pub session_start: DateTime<Utc>,
    /// Orders are stamped within this window after session start
    #[serde(default = "defaults::order_window_ms")]
    pub order_window_ms: i64,
    /// Fixed RNG seed; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
    /// Instrument registry file; `None` uses the built-in catalogue
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
    /// Write the JSON export here after generation
    #[serde(default)]
    pub export_path: Option<PathBuf>,
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("invalid registry")]
    Registry(#[from] RegistryError),
}

mod defaults {
    use chrono::{DateTime, TimeZone, Utc};

    pub fn tick_count() -> usize {
        100
    }

    pub fn tick_interval_ms() -> i64 {
        60_000
    }

    pub fn session_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 28, 9, 30, 0)
            .single()
            .unwrap_or_default()
    }

    pub fn order_window_ms() -> i64 {
        5_400_000
    }

    pub fn log_level() -> String {
        "info".into()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_count: defaults::tick_count(),
            tick_interval_ms: defaults::tick_interval_ms(),
            session_start: defaults::session_start(),
            order_window_ms: defaults::order_window_ms(),
            seed: None,
            registry_path: None,
            export_path: None,
            log_level: defaults::log_level(),
        }
    }
}

impl EngineConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_count < 2 {
            return Err(ConfigError::Invalid(format!(
                "tick_count must be at least 2, got {}",
                self.tick_count
            )));
        }
        if self.tick_interval_ms <= 0 {
            return Err(ConfigError::Invalid(format!(
                "tick_interval_ms must be positive, got {}",
                self.tick_interval_ms
            )));
        }
        if self.order_window_ms <= 0 {
            return Err(ConfigError::Invalid(format!(
                "order_window_ms must be positive, got {}",
                self.order_window_ms
            )));
        }

        // Every tick and order timestamp must fit in i64 millis
        let start = self.session_start_ms();
        let last_tick = i64::try_from(self.tick_count - 1)
            .ok()
            .and_then(|steps| steps.checked_mul(self.tick_interval_ms))
            .and_then(|span| start.checked_add(span));
        if last_tick.is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} ticks of {} ms overflow the timestamp range",
                self.tick_count, self.tick_interval_ms
            )));
        }
        if start.checked_add(self.order_window_ms).is_none() {
            return Err(ConfigError::Invalid(format!(
                "order_window_ms {} overflows the timestamp range",
                self.order_window_ms
            )));
        }
        Ok(())
    }

    /// Session start as unix millis
    pub fn session_start_ms(&self) -> i64 {
        self.session_start.timestamp_millis()
    }
}
