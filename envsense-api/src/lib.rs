pub mod models;

/// Interval at which the dashboard page re-requests the latest sample.
/// Mirrors the literal timer in the server's `assets/dashboard.html`.
pub const POLL_INTERVAL_MS: u64 = 5_000;
