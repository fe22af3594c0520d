//! Status Indicator Component
//!
//! Spinner used while a loader is still waiting.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::COLOR_LOADING;

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks each spinner frame stays on screen (16ms ticks, ~100ms per frame)
const TICKS_PER_FRAME: u64 = 6;

/// Get the spinner character for a tick count
pub fn get_spinner_char(tick: u64) -> char {
    let frame = (tick / TICKS_PER_FRAME) as usize;
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// A single `◐ Loading...` style line.
pub fn spinner_line(message: &str, tick: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", get_spinner_char(tick)),
            Style::default().fg(COLOR_LOADING),
        ),
        Span::styled(
            message.to_string(),
            Style::default()
                .fg(COLOR_LOADING)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
