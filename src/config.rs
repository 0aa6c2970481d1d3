use serde::{Deserialize, Serialize};
use crate::errors::BridgeError;

const DEFAULT_UI_THREAD_NAME: &str = "ui-runtime";
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Log level for the bridge. Maps onto [`log::LevelFilter`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Bridge configuration. Controls how the UI thread is spawned and how much it logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the OS thread that owns the UI runtime
    pub ui_thread_name: String,
    /// Capacity of the UI event broadcast channel
    pub event_capacity: usize,
    /// Log level used by [`init_logging`]
    pub log_level: LogLevel,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            ui_thread_name: DEFAULT_UI_THREAD_NAME.to_string(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
            log_level: LogLevel::default(),
        }
    }
}

impl BridgeConfig {
    /// Parse a configuration from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let config: Self = serde_json::from_str(json).map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.ui_thread_name.trim().is_empty() {
            return Err(BridgeError::InvalidConfig("ui_thread_name must not be empty".into()));
        }
        if self.event_capacity == 0 {
            return Err(BridgeError::InvalidConfig("event_capacity must be greater than zero".into()));
        }
        Ok(())
    }
}

/// Initialize `env_logger` at the given level. `RUST_LOG` still overrides per module.
/// Calling this more than once is harmless.
pub fn init_logging(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.into())
        .parse_default_env()
        .try_init();
}
