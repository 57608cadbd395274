mod app;
mod domain;
mod input;
mod notifications;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "A minimal terminal focus timer with a to-do list", long_about = None)]
struct Cli {
    /// Start with a duration already selected, in minutes
    #[arg(short, long)]
    minutes: Option<u64>,

    /// Preset durations in minutes, comma-separated
    #[arg(long, value_delimiter = ',', default_value = "5,15,25,45")]
    presets: Vec<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.presets.is_empty() || cli.presets.contains(&0) {
        anyhow::bail!("presets must be positive minute values");
    }
    if cli.minutes == Some(0) {
        anyhow::bail!("minutes must be greater than zero");
    }

    let mut app = AppState::new(cli.presets);
    if let Some(minutes) = cli.minutes {
        app.set_duration_minutes(minutes);
    }

    run_tui(&mut app)
}

fn run_tui(app: &mut AppState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();
    let mut last_title = String::new();

    loop {
        // Keep the terminal window title in sync with the countdown
        let title = app.window_title();
        if title != last_title {
            execute!(terminal.backend_mut(), SetTitle(&title))?;
            last_title = title;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout so the countdown keeps moving
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown
        app.tick();
    }
}
