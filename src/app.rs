// App state and main event loop.
// Renders whatever snapshot is current and picks up upgrades as they arrive.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::watch;

use crate::stats::DisplayedStats;
use crate::ui;

/// Main application state.
pub struct App {
    /// Snapshot published by the stats manager.
    pub stats: watch::Receiver<DisplayedStats>,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(stats: watch::Receiver<DisplayedStats>) -> Self {
        Self {
            stats,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll for input; returns after at most 100ms so upgrades get redrawn.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }
}
