use std::time::Duration;

pub const DEFAULT_INTENT_POLL_INTERVAL_MS: u64 = 100;
pub const DEFAULT_INTENT_SENSITIVITY: u32 = 7;
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 100;

/// Timing options for one display controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Time between intent samples
    pub intent_poll_interval: Duration,
    /// Largest combined x+y movement (cells) still counted as "not moving"
    pub intent_sensitivity: u32,
    /// Time to wait before hiding
    pub close_delay: Duration,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            intent_poll_interval: Duration::from_millis(DEFAULT_INTENT_POLL_INTERVAL_MS),
            intent_sensitivity: DEFAULT_INTENT_SENSITIVITY,
            close_delay: Duration::from_millis(DEFAULT_CLOSE_DELAY_MS),
        }
    }
}
