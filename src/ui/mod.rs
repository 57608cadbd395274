pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area);
    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.tasks_area);

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
