//! UI rendering for the storefront.
//!
//! One screen: the item list with a footer of key hints, plus the detail
//! modal drawn on top while an item is selected. Hit areas are rebuilt on
//! every frame, so a click always resolves against what is on screen.

pub mod components;
mod helpers;
pub mod interaction;
mod item_detail;
mod item_list;
mod layout;
mod theme;

pub use item_detail::{render_item_detail, ItemDetailProps, CLOSE_LABEL};
pub use item_list::{effective_scroll, render_item_list, ItemListProps, LINES_PER_ITEM};
pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, ShellMode};
use theme::COLOR_DIM;

/// Render the whole frame.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_registry.clear();

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let [list_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let tick = app.tick_count;
    let highlighted = app.highlighted;
    let scroll = app.list_scroll;

    let registry = &mut app.hit_registry;
    app.list_scroll = app.catalog.render(|view| {
        render_item_list(
            frame,
            list_area,
            ItemListProps {
                items: view.result.map(Vec::as_slice),
                loading: view.loading,
                highlighted,
                scroll,
                tick,
            },
            registry,
        )
    });

    render_footer(frame, footer_area, app.mode());

    let detail = app.shell.detail();
    let props = ItemDetailProps {
        item: detail.map(|view| view.item()),
        supplement: detail.map(|view| view.supplement().view()),
        tick,
    };
    render_item_detail(frame, area, &ctx, props, &mut app.hit_registry);
}

fn render_footer(frame: &mut Frame, area: Rect, mode: ShellMode) {
    let hints = match mode {
        ShellMode::Browsing => "↑/↓ move · enter open · click to open · q quit",
        ShellMode::Viewing => "esc close · click outside to close · ctrl+c quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line).centered(), area);
}
