use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Clock style while counting down
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Clock style while paused
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Clock style while no countdown is active
pub fn idle_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Clock style once time is up
pub fn finished_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}
