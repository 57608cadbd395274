use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Timer pane: fixed height
/// - Task pane: remainder
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(9), // Timer pane
            Constraint::Min(0),    // Task pane
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        timer_area: chunks[1],
        tasks_area: chunks[2],
    }
}

/// Create centered modal area (for the input form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
