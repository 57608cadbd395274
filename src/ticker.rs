use std::time::{Duration, Instant};

/// Event-loop poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Get poll duration for the event loop
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Converts wall-clock time into discrete one-second countdown ticks.
///
/// Armed while the countdown is running; dropping it is the cancellation,
/// which makes cancellation synchronous and idempotent. `lap()` advances
/// the baseline by whole seconds only, so the fractional remainder
/// carries over and the cadence does not drift against the poll interval.
#[derive(Debug)]
pub struct TickSource {
    last: Instant,
}

impl TickSource {
    /// Arm a new tick source starting now
    pub fn arm() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Number of whole seconds elapsed since the previous lap
    pub fn lap(&mut self) -> u64 {
        let elapsed = self.last.elapsed().as_secs();
        self.last += Duration::from_secs(elapsed);
        elapsed
    }
}
