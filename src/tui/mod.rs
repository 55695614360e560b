//! Interactive chart TUI
//!
//! Full-screen ratatui interface cycling through the chart screens derived
//! from a filtered ledger.

pub mod app;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{PennyError, PennyResult};
use crate::models::Transaction;

use app::App;

/// Run the chart TUI over the given transactions until the user quits
pub fn run(transactions: Vec<Transaction>) -> PennyResult<()> {
    let mut app = App::new(transactions);

    enable_raw_mode().map_err(|e| PennyError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| PennyError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| PennyError::Tui(e.to_string()))?;

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even if the loop errored
    disable_raw_mode().map_err(|e| PennyError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| PennyError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| PennyError::Tui(e.to_string()))?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> PennyResult<()> {
    loop {
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| PennyError::Tui(e.to_string()))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(200)).map_err(|e| PennyError::Tui(e.to_string()))? {
            if let Event::Key(key) = event::read().map_err(|e| PennyError::Tui(e.to_string()))? {
                handle_key_event(app, key);
            }
        }
    }
}

/// Dispatch keyboard events
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Right => app.next_screen(),
        KeyCode::BackTab | KeyCode::Left => app.prev_screen(),
        _ => {}
    }
}
