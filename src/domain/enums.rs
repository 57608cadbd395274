/// Discrete mode of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No duration selected, or a duration set but not yet started
    Idle,
    /// Counting down, one second per tick
    Running,
    /// Stopped with time remaining
    Paused,
    /// Reached zero; sticks until reset or a new duration is chosen
    Finished,
}

impl Phase {
    /// Badge text shown next to the clock
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
            Self::Finished => "TIME'S UP",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Modal input for a custom duration in minutes
    CustomDuration,
    /// Modal input for a new task title
    AddingTask,
}
