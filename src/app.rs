use crate::domain::{format_clock, Countdown, Phase, Task, TickOutcome, UiMode};
use crate::input;
use crate::notifications;
use crate::ticker::TickSource;

/// State of the modal input form (custom duration or new task)
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub buffer: String,
    pub error: Option<String>,
}

/// Main application state
///
/// Owns the countdown, the tick source that drives it, and the task
/// list. The tick source is armed exactly while the countdown is
/// Running; every transition out of Running drops it before returning,
/// so a stale tick can never fire after a pause, reset, or re-selection.
pub struct AppState {
    pub countdown: Countdown,
    tick_source: Option<TickSource>,
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Selectable preset durations, in minutes
    pub presets: Vec<u64>,
}

impl AppState {
    pub fn new(presets: Vec<u64>) -> Self {
        Self {
            countdown: Countdown::new(),
            tick_source: None,
            tasks: Vec::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
            presets,
        }
    }

    /// Select a duration in minutes. A running countdown is stopped
    /// before the new value lands; afterwards no tick source is armed.
    pub fn set_duration_minutes(&mut self, minutes: u64) {
        self.tick_source = None;
        self.countdown.set_duration(minutes * 60);
    }

    /// Select the preset at `index`, if there is one
    pub fn apply_preset(&mut self, index: usize) {
        if let Some(&minutes) = self.presets.get(index) {
            self.set_duration_minutes(minutes);
        }
    }

    /// Start the countdown; arms the tick source on an actual transition
    pub fn start_timer(&mut self) {
        if self.countdown.start() {
            self.tick_source = Some(TickSource::arm());
        }
    }

    /// Pause the countdown; cancels the tick source on an actual transition
    pub fn pause_timer(&mut self) {
        if self.countdown.pause() {
            self.tick_source = None;
        }
    }

    /// The start/pause toggle
    pub fn toggle_start_pause(&mut self) {
        match self.countdown.phase() {
            Phase::Running => self.pause_timer(),
            _ => self.start_timer(),
        }
    }

    /// Clear the countdown back to the selection screen
    pub fn reset_timer(&mut self) {
        self.tick_source = None;
        self.countdown.reset();
    }

    /// Whether a tick source is currently armed
    pub fn is_ticking(&self) -> bool {
        self.tick_source.is_some()
    }

    /// Apply pending countdown ticks. Called from the event loop after
    /// every poll; consumes one tick per fully elapsed second, so ticks
    /// stay sequential even when the loop stalls.
    pub fn tick(&mut self) {
        let pending = match self.tick_source.as_mut() {
            Some(source) => source.lap(),
            None => return,
        };

        for _ in 0..pending {
            match self.countdown.tick() {
                TickOutcome::Ticked => {}
                TickOutcome::Finished => {
                    self.tick_source = None;
                    notifications::notify_time_up();
                    break;
                }
                TickOutcome::Ignored => break,
            }
        }
    }

    /// Terminal window title, mirroring the countdown state
    pub fn window_title(&self) -> String {
        let clock = format_clock(self.countdown.remaining_seconds());
        match self.countdown.phase() {
            Phase::Running => format!("{} - Tempo", clock),
            Phase::Paused => format!("Paused - {}", clock),
            Phase::Finished => String::from("Time's up! - Tempo"),
            Phase::Idle => {
                if self.countdown.remaining_seconds() > 0 {
                    format!("{} - Tempo", clock)
                } else {
                    String::from("Tempo - Focus Timer & To-Do")
                }
            }
        }
    }

    /// Open the custom-duration form
    pub fn open_custom_duration(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::CustomDuration;
    }

    /// Open the add-task form
    pub fn open_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Add character to the input form buffer
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.buffer.push(c);
            form.error = None;
        }
    }

    /// Backspace in the input form buffer
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.buffer.pop();
            form.error = None;
        }
    }

    /// Submit the input form. An invalid duration keeps the form open
    /// with an error line so the user can correct the entry; it never
    /// reaches the countdown.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.as_ref() else {
            return;
        };

        match self.ui_mode {
            UiMode::CustomDuration => match input::parse_minutes(&form.buffer) {
                Ok(minutes) => {
                    self.input_form = None;
                    self.ui_mode = UiMode::Normal;
                    self.set_duration_minutes(minutes);
                }
                Err(err) => {
                    let message = err.to_string();
                    if let Some(form) = self.input_form.as_mut() {
                        form.error = Some(message);
                    }
                }
            },
            UiMode::AddingTask => {
                let title = form.buffer.trim().to_string();
                if title.is_empty() {
                    // Nothing to add; leave the form open
                    return;
                }
                self.input_form = None;
                self.ui_mode = UiMode::Normal;
                self.tasks.push(Task::new(title));
            }
            UiMode::Normal => {}
        }
    }

    /// Cancel the input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Move task selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move task selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, title: String) {
        self.tasks.push(Task::new(title));
    }

    /// Toggle completion on the selected task
    pub fn toggle_selected_task(&mut self) {
        if let Some(task) = self.tasks.get_mut(self.selected_index) {
            task.toggle_completed();
        }
    }

    /// Delete the selected task
    pub fn delete_selected_task(&mut self) {
        if self.selected_index >= self.tasks.len() {
            return;
        }
        self.tasks.remove(self.selected_index);
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    /// Count of tasks not yet checked off
    pub fn open_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        AppState::new(vec![5, 15, 25, 45])
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.countdown.phase(), Phase::Idle);
        assert_eq!(app.countdown.remaining_seconds(), 0);
        assert!(!app.is_ticking());
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_apply_preset() {
        let mut app = create_test_app();
        app.apply_preset(2);
        assert_eq!(app.countdown.remaining_seconds(), 25 * 60);
        assert_eq!(app.countdown.phase(), Phase::Idle);
        assert!(!app.is_ticking());

        // Out-of-range preset index is a no-op
        app.apply_preset(9);
        assert_eq!(app.countdown.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn test_start_arms_tick_source() {
        let mut app = create_test_app();
        app.set_duration_minutes(25);
        app.start_timer();
        assert_eq!(app.countdown.phase(), Phase::Running);
        assert!(app.is_ticking());
    }

    #[test]
    fn test_start_with_nothing_set_is_noop() {
        let mut app = create_test_app();
        app.start_timer();
        assert_eq!(app.countdown.phase(), Phase::Idle);
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_pause_cancels_tick_source() {
        let mut app = create_test_app();
        app.set_duration_minutes(25);
        app.start_timer();
        app.pause_timer();
        assert_eq!(app.countdown.phase(), Phase::Paused);
        assert!(!app.is_ticking());

        // Pause again: idempotent
        app.pause_timer();
        assert_eq!(app.countdown.phase(), Phase::Paused);
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_toggle_start_pause() {
        let mut app = create_test_app();
        app.set_duration_minutes(5);

        app.toggle_start_pause();
        assert_eq!(app.countdown.phase(), Phase::Running);
        assert!(app.is_ticking());

        app.toggle_start_pause();
        assert_eq!(app.countdown.phase(), Phase::Paused);
        assert!(!app.is_ticking());

        app.toggle_start_pause();
        assert_eq!(app.countdown.phase(), Phase::Running);
        assert!(app.is_ticking());
    }

    #[test]
    fn test_reset_cancels_tick_source() {
        let mut app = create_test_app();
        app.set_duration_minutes(5);
        app.start_timer();
        app.reset_timer();
        assert_eq!(app.countdown.snapshot(), (Phase::Idle, 0));
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_set_duration_while_running_cancels_tick_source() {
        let mut app = create_test_app();
        app.set_duration_minutes(5);
        app.start_timer();
        assert!(app.is_ticking());

        app.set_duration_minutes(10);
        assert_eq!(app.countdown.snapshot(), (Phase::Idle, 600));
        assert!(!app.is_ticking());
    }

    #[test]
    fn test_tick_without_source_is_noop() {
        let mut app = create_test_app();
        app.set_duration_minutes(5);
        app.tick();
        assert_eq!(app.countdown.remaining_seconds(), 300);
    }

    #[test]
    fn test_window_title_per_phase() {
        let mut app = create_test_app();
        assert_eq!(app.window_title(), "Tempo - Focus Timer & To-Do");

        app.set_duration_minutes(25);
        assert_eq!(app.window_title(), "25:00 - Tempo");

        app.start_timer();
        assert_eq!(app.window_title(), "25:00 - Tempo");

        app.pause_timer();
        assert_eq!(app.window_title(), "Paused - 25:00");

        app.set_duration_minutes(1);
        app.start_timer();
        for _ in 0..60 {
            app.countdown.tick();
        }
        assert_eq!(app.window_title(), "Time's up! - Tempo");

        app.reset_timer();
        assert_eq!(app.window_title(), "Tempo - Focus Timer & To-Do");
    }

    #[test]
    fn test_custom_duration_form_accepts_valid_minutes() {
        let mut app = create_test_app();
        app.open_custom_duration();
        assert_eq!(app.ui_mode, UiMode::CustomDuration);

        for c in "90".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.countdown.remaining_seconds(), 90 * 60);
    }

    #[test]
    fn test_custom_duration_form_reprompts_on_invalid_input() {
        let mut app = create_test_app();
        app.open_custom_duration();

        for c in "abc".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        // Form stays open with the buffer retained and an error shown
        assert_eq!(app.ui_mode, UiMode::CustomDuration);
        let form = app.input_form.as_ref().unwrap();
        assert_eq!(form.buffer, "abc");
        assert!(form.error.is_some());
        assert_eq!(app.countdown.remaining_seconds(), 0);

        // Typing clears the error
        app.input_form_backspace();
        assert!(app.input_form.as_ref().unwrap().error.is_none());
    }

    #[test]
    fn test_custom_duration_form_rejects_zero() {
        let mut app = create_test_app();
        app.open_custom_duration();
        app.input_form_add_char('0');
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::CustomDuration);
        assert!(app.input_form.as_ref().unwrap().error.is_some());
        assert_eq!(app.countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_cancel_input_form() {
        let mut app = create_test_app();
        app.open_custom_duration();
        app.input_form_add_char('7');
        app.cancel_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_add_task_via_form() {
        let mut app = create_test_app();
        app.open_add_task();
        for c in "  Buy milk  ".chars() {
            app.input_form_add_char(c);
        }
        app.submit_input_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Buy milk");
    }

    #[test]
    fn test_add_task_form_ignores_empty_title() {
        let mut app = create_test_app();
        app.open_add_task();
        app.input_form_add_char(' ');
        app.submit_input_form();

        // Nothing added; the form stays open
        assert!(app.tasks.is_empty());
        assert_eq!(app.ui_mode, UiMode::AddingTask);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();
        app.add_task("one".to_string());
        app.add_task("two".to_string());

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_selected_task() {
        let mut app = create_test_app();
        app.add_task("one".to_string());
        app.toggle_selected_task();
        assert!(app.tasks[0].completed);
        app.toggle_selected_task();
        assert!(!app.tasks[0].completed);
    }

    #[test]
    fn test_toggle_with_no_tasks_is_noop() {
        let mut app = create_test_app();
        app.toggle_selected_task();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_delete_selected_task_clamps_selection() {
        let mut app = create_test_app();
        app.add_task("one".to_string());
        app.add_task("two".to_string());
        app.move_selection_down();

        app.delete_selected_task();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "one");
        assert_eq!(app.selected_index, 0);

        app.delete_selected_task();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected_index, 0);

        // Delete on an empty list is a no-op
        app.delete_selected_task();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_open_task_count() {
        let mut app = create_test_app();
        app.add_task("one".to_string());
        app.add_task("two".to_string());
        app.add_task("three".to_string());
        app.move_selection_down();
        app.toggle_selected_task();

        assert_eq!(app.open_task_count(), 2);
    }
}
