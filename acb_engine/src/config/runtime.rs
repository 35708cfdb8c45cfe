// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorePreferences {
    /// Whether every selection change is written through to persistence
    pub persist_on_change: bool,

    /// Whether the legacy snapshot key is also cleared on clear-all
    pub clear_legacy_snapshot_key: bool,

    /// Whether store mutations emit debug log events
    pub log_store_mutations: bool,

    /// Whether relabel passes log fields they could not resolve
    pub log_unresolved_labels: bool,
}

impl Default for StorePreferences {
    fn default() -> Self {
        Self {
            persist_on_change: env::var("ACB_STORE_PERSIST_ON_CHANGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            clear_legacy_snapshot_key: env::var("ACB_STORE_CLEAR_LEGACY_KEY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_store_mutations: env::var("ACB_STORE_LOG_MUTATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_unresolved_labels: env::var("ACB_STORE_LOG_UNRESOLVED_LABELS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizePreferences {
    /// Whether normalized trees are cached by payload content hash
    pub enable_normalize_cache: bool,

    /// Whether shape detection logs which input shape was recognized
    pub log_detected_shape: bool,

    /// Whether fields rejected during normalization are logged
    pub log_skipped_fields: bool,
}

impl Default for NormalizePreferences {
    fn default() -> Self {
        Self {
            enable_normalize_cache: env::var("ACB_NORMALIZE_ENABLE_CACHE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_detected_shape: env::var("ACB_NORMALIZE_LOG_SHAPE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_skipped_fields: env::var("ACB_NORMALIZE_LOG_SKIPPED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("ACB_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("ACB_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("ACB_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub store: StorePreferences,
    pub normalize: NormalizePreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Store
    pub const STORE_PERSIST_ON_CHANGE: &str = "ACB_STORE_PERSIST_ON_CHANGE";
    pub const STORE_CLEAR_LEGACY_KEY: &str = "ACB_STORE_CLEAR_LEGACY_KEY";
    pub const STORE_LOG_MUTATIONS: &str = "ACB_STORE_LOG_MUTATIONS";
    pub const STORE_LOG_UNRESOLVED_LABELS: &str = "ACB_STORE_LOG_UNRESOLVED_LABELS";

    // Normalize
    pub const NORMALIZE_ENABLE_CACHE: &str = "ACB_NORMALIZE_ENABLE_CACHE";
    pub const NORMALIZE_LOG_SHAPE: &str = "ACB_NORMALIZE_LOG_SHAPE";
    pub const NORMALIZE_LOG_SKIPPED: &str = "ACB_NORMALIZE_LOG_SKIPPED";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "ACB_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "ACB_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "ACB_LOGGING_MIN_LEVEL";
}
