//! Terminal UI: the player-facing side of the game controller.
//!
//! Everything runs on one thread. A key press is handled completely,
//! including the computer's search, before the next frame is drawn.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Runs the terminal game until the player quits.
#[instrument(skip(config))]
pub fn run(config: &GameConfig) -> Result<()> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.ai_first());
    let res = run_app(&mut terminal, app);
    drop(guard);

    if let Err(err) = &res {
        error!(error = %err, "Terminal UI failed");
    }
    info!("Terminal game closed");
    res
}

/// Runs `restore` when dropped, whichever way [`run`] exits.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen, and shows the cursor again.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
