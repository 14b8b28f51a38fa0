//! Build-time configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a static WASM bundle, so configuration is baked in at compile
//! time from the build environment rather than read at runtime. An empty API
//! base URL means requests go to the serving origin (dev proxy setups).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL prefixed to every API path (`DAILYUPDATES_API_URL`).
pub const API_BASE_URL: &str = match option_env!("DAILYUPDATES_API_URL") {
    Some(url) => url,
    None => "",
};

/// Console log level name (`DAILYUPDATES_LOG_LEVEL`), defaults to `info`.
pub const LOG_LEVEL: &str = match option_env!("DAILYUPDATES_LOG_LEVEL") {
    Some(level) => level,
    None => "info",
};

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_TTL_MS: f64 = 5_000.0;

/// Maximum number of toasts queued at once; the oldest is evicted beyond this.
pub const TOAST_CAPACITY: usize = 5;

/// Page size for paginated post lists ("show more").
pub const POSTS_PAGE_SIZE: usize = 9;

/// Absolute URL for an API `path` against the configured backend.
pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Normalize a log level name, falling back to `info` for unknown input.
pub fn log_level_name(raw: &str) -> &'static str {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Map a configured level name to a `log::Level`.
#[cfg(feature = "csr")]
pub fn log_level(raw: &str) -> log::Level {
    match log_level_name(raw) {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}
