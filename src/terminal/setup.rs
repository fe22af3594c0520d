//! Terminal setup and teardown functions.
//!
//! Low-level helpers used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen, plus mouse capture when `mouse` is set.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times. Errors are ignored so this can run from
/// drop and panic paths.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    // Disabling capture that was never enabled is harmless
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the real terminal after a panic or error, ignoring all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
