//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default base URL of the poll service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api/polls";

/// Seconds between background poll refreshes
pub const DEFAULT_REFRESH_SECS: u64 = 5;

/// Per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "pollboard.log";

/// Number of empty options a fresh draft starts with
pub const INITIAL_DRAFT_OPTIONS: usize = 2;

/// Application name
pub const APP_NAME: &str = "Pollboard";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
