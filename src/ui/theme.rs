//! Color theme constants.
//!
//! Minimal dark palette shared by the list and the detail modal.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Loading indicators
pub const COLOR_LOADING: Color = Color::Yellow;

/// Supplementary picture in the detail modal
pub const COLOR_PICTURE: Color = Color::LightGreen;

/// Close control
pub const COLOR_BUTTON: Color = Color::Cyan;

/// Background color for the detail modal
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
