use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};
use thiserror::Error;

/// Error type for the Ratatui frontend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stdout is not attached to a terminal.
    #[error("Terminal error: stdout is not a terminal")]
    NotATerminal,
}

pub(crate) type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

pub(crate) fn setup_terminal() -> Result<CrosstermTerminal, RatatuiError> {
    if !io::stdout().is_terminal() {
        return Err(RatatuiError::NotATerminal);
    }
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub(crate) fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<(), RatatuiError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run `screen` between terminal setup and restore.
///
/// The terminal is restored even when `screen` fails; the screen's error wins.
pub(crate) fn with_terminal<T>(
    screen: impl FnOnce(&mut CrosstermTerminal) -> Result<T, RatatuiError>,
) -> Result<T, RatatuiError> {
    let mut terminal = setup_terminal()?;
    let result = screen(&mut terminal);
    let restored = restore_terminal(&mut terminal);
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_types() {
        let err = RatatuiError::NotATerminal;
        assert_eq!(err.to_string(), "Terminal error: stdout is not a terminal");

        let err = RatatuiError::from(io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
