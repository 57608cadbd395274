pub mod handler;

pub use handler::{handle_key, parse_minutes, DurationInputError};
