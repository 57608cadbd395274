use crate::app::AppState;
use crate::domain::{format_clock, Phase};
use crate::ui::styles::{
    border_style, finished_style, hint_style, idle_style, paused_style, running_style, title_style,
};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Clock style for the given phase
fn phase_style(phase: Phase) -> Style {
    match phase {
        Phase::Running => running_style(),
        Phase::Paused => paused_style(),
        Phase::Finished => finished_style(),
        Phase::Idle => idle_style(),
    }
}

/// Projected wall-clock finish time, snapped to the minute
fn projected_finish(remaining_seconds: u64) -> String {
    let eta = Local::now() + chrono::Duration::seconds(remaining_seconds as i64);
    eta.format("%H:%M").to_string()
}

/// The duration selection row: numbered presets plus custom entry
fn preset_row(presets: &[u64]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, minutes) in presets.iter().enumerate() {
        spans.push(Span::styled(format!("[{}]", i + 1), title_style()));
        spans.push(Span::raw(format!(" {}m   ", minutes)));
    }
    spans.push(Span::styled("[c]", title_style()));
    spans.push(Span::raw(" custom"));
    Line::from(spans)
}

/// Render the countdown pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let (phase, remaining) = app.countdown.snapshot();

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::styled(format_clock(remaining), phase_style(phase)));
    lines.push(Line::styled(phase.label(), hint_style()));
    lines.push(Line::raw(""));

    match phase {
        Phase::Running => {
            lines.push(Line::from(vec![
                Span::styled("[Space]", title_style()),
                Span::raw(" pause   "),
                Span::styled("[r]", title_style()),
                Span::raw(" reset"),
            ]));
            lines.push(Line::styled(
                format!("ends ~{}", projected_finish(remaining)),
                hint_style(),
            ));
        }
        Phase::Paused => {
            lines.push(Line::from(vec![
                Span::styled("[Space]", title_style()),
                Span::raw(" resume   "),
                Span::styled("[r]", title_style()),
                Span::raw(" reset"),
            ]));
        }
        Phase::Finished => {
            lines.push(Line::styled("Take a breath, then pick the next block.", hint_style()));
            lines.push(preset_row(&app.presets));
        }
        Phase::Idle => {
            if app.countdown.selection_pending() {
                lines.push(Line::styled("Pick a focus block:", hint_style()));
                lines.push(preset_row(&app.presets));
            } else {
                lines.push(Line::from(vec![
                    Span::styled("[Space]", title_style()),
                    Span::raw(" start   "),
                    Span::styled("[r]", title_style()),
                    Span::raw(" reset"),
                ]));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Focus Timer ", title_style())),
        );

    f.render_widget(paragraph, area);
}
