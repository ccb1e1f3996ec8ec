mod app;
mod circuit;
mod config;
mod dashboard;
mod data;
mod error;
mod i18n;
mod logging;
mod progress;
mod quest;
mod rewards;
mod router;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use app::App;
use data::{builtin_dataset, load_dataset};

const FRAME: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    logging::init().context("failed to initialise logging")?;

    let settings = config::load_settings()?;
    let dataset = match &settings.data_file {
        Some(path) => load_dataset(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => builtin_dataset()?,
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dataset, settings);
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
    } else {
        tracing::info!("Konark Quest exiting");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        // Block on input unless the celebration needs frames.
        if app.is_animating(Instant::now()) && !event::poll(FRAME)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
