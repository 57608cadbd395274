use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" Space start/pause   "),
        Span::raw("r reset   "),
        Span::raw("1-4 preset   "),
        Span::raw("c custom   "),
        Span::raw("↑/↓ select   "),
        Span::raw("a add   "),
        Span::raw("Enter/d check   "),
        Span::raw("x delete   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
