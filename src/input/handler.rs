use crate::app::AppState;
use crate::domain::UiMode;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use thiserror::Error;

/// The single user-facing input error: a custom duration that is not a
/// positive whole number of minutes. Rejected here at the boundary; the
/// countdown never sees it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationInputError {
    #[error("enter a number of minutes")]
    NotANumber,
    #[error("minutes must be greater than zero")]
    NotPositive,
}

/// Parse a custom duration entry in whole minutes
pub fn parse_minutes(input: &str) -> Result<u64, DurationInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationInputError::NotANumber);
    }
    match trimmed.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes as u64),
        Ok(_) => Err(DurationInputError::NotPositive),
        Err(_) => Err(DurationInputError::NotANumber),
    }
}

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::CustomDuration | UiMode::AddingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

        // Start/pause toggle
        KeyCode::Char(' ') => app.toggle_start_pause(),

        // Clear back to the selection screen
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),

        // Duration selection, offered only while nothing is on the clock
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if app.countdown.selection_pending() {
                app.open_custom_duration();
            }
        }
        KeyCode::Char(ch @ '1'..='9') => {
            if app.countdown.selection_pending() {
                let index = (ch as usize) - ('1' as usize);
                app.apply_preset(index);
            }
        }

        // Task list
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_task(),
        KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_selected_task(),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected_task(),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the input form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}
