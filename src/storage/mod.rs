//! Persistence layer (local key-value JSON storage).

pub mod local;
pub mod log;
pub mod profile;

pub use local::LocalStorage;
pub use log::LogStore;
pub use profile::ProfileStore;

/// Storage key names as constants.
pub mod keys {
    use chrono::NaiveDate;

    /// The single user profile (one profile per install)
    pub const USER_PROFILE: &str = "profile";
    /// Prefix for per-date daily logs
    pub const DAILY_LOG_PREFIX: &str = "daily-log";

    /// Key for one calendar date's log, e.g. `daily-log-2026-08-22`.
    pub fn daily_log(date: NaiveDate) -> String {
        format!("{}-{}", DAILY_LOG_PREFIX, date)
    }

}
