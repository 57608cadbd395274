use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single to-do entry
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Task text as entered
    pub title: String,
    /// Whether the task has been checked off
    pub completed: bool,
    /// When the task was added
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            completed: false,
            created_at: Local::now(),
        }
    }

    /// Flip the completed flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
