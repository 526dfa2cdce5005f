use std::time::Duration;

/// Delay between two pin reads within a pass.
pub const PIN_DELAY: Duration = Duration::from_millis(10);

/// Delay between two full passes.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(1);

/// Sleep durations of the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTiming {
    pub pin_delay: Duration,
    pub cycle_interval: Duration,
}

impl Default for PollTiming {
    fn default() -> Self {
        Self {
            pin_delay: PIN_DELAY,
            cycle_interval: CYCLE_INTERVAL,
        }
    }
}
