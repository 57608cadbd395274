use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the to-do list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = if app.tasks.is_empty() {
        vec![ListItem::new(Line::styled(
            "  No tasks yet. Press 'a' to add one.",
            hint_style(),
        ))]
    } else {
        app.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let checkbox = if task.completed { "[x] " } else { "[ ] " };
                let style = if i == app.selected_index {
                    selected_style()
                } else if task.completed {
                    done_style()
                } else {
                    default_style()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(format!("{}{}", checkbox, task.title), style),
                    Span::styled(
                        format!("  added {}", task.created_at.format("%H:%M")),
                        hint_style(),
                    ),
                ]))
            })
            .collect()
    };

    let title = format!(" To-Do ({} open) ", app.open_task_count());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
