//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate screen
//! and restores it when dropped, so an early return or error still leaves a
//! usable shell behind. The panic hook covers the unwinding case.
//!
//! ```no_run
//! use hatstore::terminal::TerminalManager;
//!
//! fn main() -> hatstore::error::StoreResult<()> {
//!     let mut term_manager = TerminalManager::new(true)?;
//!     let terminal = term_manager.terminal();
//!     // ... run the app ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};
use tracing::debug;

use crate::error::{StoreResult, UiError};

/// RAII guard that restores terminal state on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore the terminal. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn init_failed(err: impl std::fmt::Display) -> UiError {
    UiError::TerminalInitFailed {
        message: err.to_string(),
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and (optionally) capture
    /// the mouse.
    pub fn new(mouse: bool) -> StoreResult<Self> {
        enable_raw_mode().map_err(init_failed)?;
        // From here on the guard undoes partial setup if anything fails
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout, mouse).map_err(init_failed)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(init_failed)?;
        terminal.clear().map_err(init_failed)?;
        debug!(mouse, "terminal initialized");

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> StoreResult<Size> {
        self.terminal.size().map_err(|e| {
            UiError::RenderFailed {
                component: "terminal size".to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> StoreResult<()> {
        self.guard.cleanup();
        self.terminal
            .show_cursor()
            .map_err(|e| UiError::TerminalRestoreFailed {
                message: e.to_string(),
            })?;
        debug!("terminal restored");
        Ok(())
    }
}
