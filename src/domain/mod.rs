pub mod countdown;
pub mod enums;
pub mod task;

pub use countdown::{format_clock, Countdown, TickOutcome};
pub use enums::{Phase, UiMode};
pub use task::Task;
