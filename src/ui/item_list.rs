//! Item list rendering.
//!
//! Three rows per entry: name, details, spacing. While the catalog is
//! loading only the loading indicator is drawn.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::catalog::STORE_TITLE;
use crate::models::Item;

use super::components::spinner_line;
use super::helpers::truncate_to_width;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// List width as percentage of area width
const LIST_WIDTH_PERCENT: f32 = 0.915;

/// Lines per item (name + details + blank line spacing)
pub const LINES_PER_ITEM: usize = 3;

/// Rows above the first entry (title + spacing)
const HEADER_ROWS: u16 = 2;

/// Inputs for [`render_item_list`]
#[derive(Debug, Clone, Copy)]
pub struct ItemListProps<'a> {
    /// `None` while loading
    pub items: Option<&'a [Item]>,
    pub loading: bool,
    pub highlighted: usize,
    /// First visible entry from the previous frame
    pub scroll: usize,
    /// Animation clock for the spinner
    pub tick: u64,
}

/// Render the list into `area`, registering one hit area per visible entry.
///
/// Returns the scroll offset actually used, which keeps the highlighted
/// entry on screen.
pub fn render_item_list(
    frame: &mut Frame,
    area: Rect,
    props: ItemListProps,
    registry: &mut HitAreaRegistry,
) -> usize {
    let area = calculate_centered_area(area);
    if area.height == 0 || area.width == 0 {
        return props.scroll;
    }

    let items = match props.items {
        Some(items) if !props.loading => items,
        _ => {
            frame.render_widget(
                Paragraph::new(spinner_line("Loading...", props.tick)),
                Rect::new(area.x, area.y, area.width, 1),
            );
            return props.scroll;
        }
    };

    render_header(frame, Rect::new(area.x, area.y, area.width, 1), items.len());

    let list_area = Rect {
        y: area.y + HEADER_ROWS.min(area.height),
        height: area.height.saturating_sub(HEADER_ROWS),
        ..area
    };
    if items.is_empty() {
        let empty = Line::from(Span::styled("No items", Style::default().fg(COLOR_DIM)));
        frame.render_widget(Paragraph::new(empty), list_area);
        return 0;
    }
    if list_area.height == 0 {
        return props.scroll;
    }

    let visible = (list_area.height as usize / LINES_PER_ITEM).max(1);
    let scroll = effective_scroll(props.scroll, props.highlighted, visible, items.len());
    let bottom = list_area.y + list_area.height;

    for (display_idx, (i, item)) in items
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible)
        .enumerate()
    {
        let row_y = list_area.y + (display_idx * LINES_PER_ITEM) as u16;
        if row_y >= bottom {
            break;
        }
        let rows = (bottom - row_y).min(2);
        render_entry(frame, list_area.x, row_y, list_area.width, rows, item, i == props.highlighted);
        registry.register(
            Rect::new(list_area.x, row_y, list_area.width, rows),
            ClickAction::SelectItem(item.clone()),
        );
    }

    scroll
}

/// Scroll offset that keeps `highlighted` inside a window of `visible` entries.
pub fn effective_scroll(scroll: usize, highlighted: usize, visible: usize, len: usize) -> usize {
    let max_scroll = len.saturating_sub(visible);
    let scroll = scroll.min(max_scroll);
    let scroll = if highlighted < scroll {
        highlighted
    } else if highlighted >= scroll + visible {
        highlighted + 1 - visible
    } else {
        scroll
    };
    scroll.min(max_scroll)
}

/// Title on the left, item count on the right
fn render_header(frame: &mut Frame, area: Rect, count: usize) {
    let count_text = format!("{} item{}", count, if count == 1 { "" } else { "s" });
    let title = truncate_to_width(
        STORE_TITLE,
        (area.width as usize).saturating_sub(count_text.len() + 1),
    );
    let padding = (area.width as usize).saturating_sub(title.len() + count_text.len());

    let line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
        Span::styled(count_text, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render a single entry
/// Line 1: > Name
/// Line 2:   details
fn render_entry(
    frame: &mut Frame,
    x: u16,
    y: u16,
    width: u16,
    rows: u16,
    item: &Item,
    is_selected: bool,
) {
    let content_width = (width as usize).saturating_sub(2);

    let prefix = if is_selected { "> " } else { "  " };
    let name_style = if is_selected {
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let name_line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(COLOR_ACCENT)),
        Span::styled(truncate_to_width(&item.name, content_width), name_style),
    ]);
    frame.render_widget(Paragraph::new(name_line), Rect::new(x, y, width, 1));

    if rows > 1 {
        let details_line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&item.details, content_width),
                Style::default().fg(COLOR_DIM),
            ),
        ]);
        frame.render_widget(Paragraph::new(details_line), Rect::new(x, y + 1, width, 1));
    }
}

/// Horizontally centered area
fn calculate_centered_area(area: Rect) -> Rect {
    let card_width = (area.width as f32 * LIST_WIDTH_PERCENT).round() as u16;
    let left_padding = area.width.saturating_sub(card_width) / 2;

    Rect::new(area.x + left_padding, area.y, card_width, area.height)
}
