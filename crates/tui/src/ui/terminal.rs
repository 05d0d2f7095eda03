use std::{
    io::{Stdout, stdout},
    ops::{Deref, DerefMut},
};

use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::error::{AppError, Result};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode terminal with restore-on-drop.
///
/// The alternate screen and raw mode are torn down in `Drop`, so the
/// caller's shell comes back intact even when the event loop bails out
/// with an error.
pub struct TerminalGuard {
    terminal: AppTerminal,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|err| AppError::Terminal(err.to_string()))?;
        Ok(Self { terminal })
    }
}

impl Deref for TerminalGuard {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {err}");
        }
        if let Err(err) = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            tracing::warn!("failed to leave alternate screen: {err}");
        }
        if let Err(err) = self.terminal.show_cursor() {
            tracing::warn!("failed to restore cursor: {err}");
        }
    }
}
