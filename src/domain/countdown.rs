use super::enums::Phase;

/// Outcome of applying a one-second tick to the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running; nothing changed
    Ignored,
    /// One second was consumed and time remains
    Ticked,
    /// This tick consumed the final second; the countdown is now Finished.
    /// Reported exactly once per finish so the caller can fire its
    /// completion notification.
    Finished,
}

/// Countdown timer state machine.
///
/// Holds the remaining duration and the current phase, nothing else: no
/// clock access and no rendering. The event loop applies one `tick()`
/// per elapsed second while running and re-renders after every
/// transition. Every operation is total; a call that does not meet its
/// guard is a no-op rather than an error.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining_seconds: u64,
    phase: Phase,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining_seconds: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Current state as rendered by the UI layer
    pub fn snapshot(&self) -> (Phase, u64) {
        (self.phase, self.remaining_seconds)
    }

    /// Whether the duration selection controls should be offered
    /// (nothing on the clock, so presets and custom entry are shown)
    pub fn selection_pending(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Select a new duration and return to Idle. A running countdown is
    /// implicitly paused first; the caller must drop its tick source.
    pub fn set_duration(&mut self, seconds: u64) {
        self.remaining_seconds = seconds;
        self.phase = Phase::Idle;
    }

    /// Begin counting down. No-op unless time remains and the countdown
    /// is not already running. Returns true on an actual transition so
    /// the caller can arm its tick source, keeping at most one armed.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running || self.remaining_seconds == 0 {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Stop counting down, keeping the remaining time. Returns true on
    /// an actual transition so the caller can drop its tick source.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    /// Clear the countdown back to Idle with no duration selected,
    /// whatever the current phase. The last duration is deliberately
    /// forgotten: reset returns to the selection screen.
    pub fn reset(&mut self) {
        self.remaining_seconds = 0;
        self.phase = Phase::Idle;
    }

    /// Consume one second. The tick that reaches zero finishes the
    /// countdown; ticks in any phase other than Running are ignored.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = Phase::Finished;
            TickOutcome::Finished
        } else {
            TickOutcome::Ticked
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Format remaining seconds as "MM:SS", widening to "HH:MM:SS" once at
/// least a full hour remains
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
