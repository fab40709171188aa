use std::time::Duration;

/// Default event-loop poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown granularity of the timer engine
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Get the event-loop poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
