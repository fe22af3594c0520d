//! Reusable UI components.
//!
//! - `DialogFrame` - centered overlay with rounded borders
//! - `StatusIndicator` - spinner line for loading states

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{dialog_rect, render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, spinner_line};
