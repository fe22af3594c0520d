//! Runtime configuration.
//!
//! Defaults match the storefront's two-second simulated fetches. Every field
//! can be overridden from the environment, which is how the integration
//! tests and impatient humans shorten the delays.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::loader::DEFAULT_DELAY;

pub const ENV_CATALOG_DELAY: &str = "HATSTORE_CATALOG_DELAY_MS";
pub const ENV_DETAIL_DELAY: &str = "HATSTORE_DETAIL_DELAY_MS";
pub const ENV_TICK: &str = "HATSTORE_TICK_MS";
pub const ENV_LOG_FILE: &str = "HATSTORE_LOG_FILE";
pub const ENV_NO_MOUSE: &str = "HATSTORE_NO_MOUSE";

/// Default event loop tick (roughly 60fps)
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

/// An environment override that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a number of milliseconds")]
    InvalidDuration { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroDuration { var: &'static str },
}

impl ConfigError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidDuration { var, value } => {
                format!("Invalid value '{}' for {}: expected whole milliseconds.", value, var)
            }
            ConfigError::ZeroDuration { var } => {
                format!("{} cannot be 0.", var)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidDuration { .. } => "E_CFG_DURATION",
            ConfigError::ZeroDuration { .. } => "E_CFG_ZERO",
        }
    }
}

/// Storefront configuration.
///
/// # Example
///
/// ```ignore
/// use hatstore::config::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_catalog_delay(Duration::from_millis(250))
///     .with_mouse(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Simulated latency of the item list fetch
    pub catalog_delay: Duration,
    /// Simulated latency of each detail supplement fetch
    pub detail_delay: Duration,
    /// Event loop tick
    pub tick_rate: Duration,
    /// Log file override; `None` uses the platform data directory
    pub log_path: Option<PathBuf>,
    /// Capture mouse events
    pub mouse: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_delay: DEFAULT_DELAY,
            detail_delay: DEFAULT_DELAY,
            tick_rate: DEFAULT_TICK_RATE,
            log_path: None,
            mouse: true,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog_delay(mut self, delay: Duration) -> Self {
        self.catalog_delay = delay;
        self
    }

    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(delay) = parse_millis(ENV_CATALOG_DELAY, lookup(ENV_CATALOG_DELAY))? {
            config.catalog_delay = delay;
        }
        if let Some(delay) = parse_millis(ENV_DETAIL_DELAY, lookup(ENV_DETAIL_DELAY))? {
            config.detail_delay = delay;
        }
        if let Some(tick) = parse_millis(ENV_TICK, lookup(ENV_TICK))? {
            // A zero tick would spin the event loop
            if tick.is_zero() {
                return Err(ConfigError::ZeroDuration { var: ENV_TICK });
            }
            config.tick_rate = tick;
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|p| !p.trim().is_empty()) {
            config.log_path = Some(PathBuf::from(path));
        }
        if lookup(ENV_NO_MOUSE).is_some() {
            config.mouse = false;
        }

        Ok(config)
    }

    /// Log file to write to, falling back to `<data dir>/hatstore/hatstore.log`.
    pub fn resolved_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("hatstore").join("hatstore.log"))
        })
    }
}

fn parse_millis(var: &'static str, raw: Option<String>) -> Result<Option<Duration>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| ConfigError::InvalidDuration { var, value: raw })
}
