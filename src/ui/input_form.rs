use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the modal input form (custom duration or new task)
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };

    let (title_text, prompt) = match app.ui_mode {
        UiMode::CustomDuration => (" Custom Duration ", "Minutes:"),
        UiMode::AddingTask => (" Add Task ", "Title:"),
        UiMode::Normal => return,
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw(prompt));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(&form.buffer, modal_title_style()),
        Span::styled("█", modal_title_style()), // Cursor
    ]));
    lines.push(Line::raw(""));
    if let Some(error) = &form.error {
        lines.push(Line::styled(error.as_str(), error_style()));
    } else {
        lines.push(Line::raw(""));
    }
    lines.push(Line::raw("Enter to confirm  ·  Esc to cancel"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
