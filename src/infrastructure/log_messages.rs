//! Log message constants for infrastructure components
//!
//! This module centralizes log messages so the wording stays consistent
//! across the application and binary.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting ChargeMind trend service";
    pub const STARTED_SUCCESSFULLY: &str = "Trend service ready";
    pub const BATCH_FINISHED: &str = "Trend batch finished";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}

/// Localization bootstrap messages
pub mod localization {
    pub const USING_STORED_LOCALE: &str = "Using stored locale";
    pub const IGNORING_STORED_LOCALE: &str = "Ignoring stored locale that is invalid or unsupported";
    pub const USING_DEFAULT_LOCALE: &str = "Using default locale";
    pub const LOCALE_CHANGED: &str = "Locale changed";
}

/// Trend evaluation messages
pub mod trends {
    pub const EVALUATED: &str = "Trend evaluated";
    pub const UNAVAILABLE: &str = "Trend unavailable: missing or unparseable reading";
    pub const SKIPPED_LINE: &str = "Skipping malformed trend request";
}
