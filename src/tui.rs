use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

use crate::sampler::Surface;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Initialise the terminal: enter raw mode + alternate screen.
pub fn init() -> Result<Terminal> {
    enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    leave()?;
    Ok(())
}

fn enter() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)
}

fn leave() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// The running TUI as a sampling surface: hiding leaves the alternate screen.
pub struct TerminalSurface<'a> {
    terminal: &'a mut Terminal,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(terminal: &'a mut Terminal) -> Self {
        Self { terminal }
    }
}

impl Surface for TerminalSurface<'_> {
    fn hide(&mut self) -> io::Result<()> {
        leave()
    }

    fn show(&mut self) -> io::Result<()> {
        enter()?;
        self.terminal.clear()
    }
}
