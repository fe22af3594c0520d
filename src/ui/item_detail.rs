//! Item detail modal.
//!
//! Drawn only while an item is selected. The body shows the item's details
//! followed by either the supplement spinner or the supplement itself.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::loader::LoaderView;
use crate::models::{Item, ItemSupplement};

use super::components::{dialog_rect, render_dialog_frame, spinner_line, DialogFrameConfig};
use super::helpers::wrap_words;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BUTTON, COLOR_DIM, COLOR_PICTURE};

pub const CLOSE_LABEL: &str = "[ Close ]";

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;

/// Inputs for [`render_item_detail`]
#[derive(Debug, Clone, Copy)]
pub struct ItemDetailProps<'a> {
    pub item: Option<&'a Item>,
    /// State of the nested supplement loader
    pub supplement: Option<LoaderView<'a, ItemSupplement>>,
    pub tick: u64,
}

/// Render the modal over `area`.
///
/// Registers, bottom to top: the backdrop (dismiss), the modal body (inert)
/// and the close control.
pub fn render_item_detail(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    props: ItemDetailProps,
    registry: &mut HitAreaRegistry,
) {
    let Some(item) = props.item else {
        return;
    };

    let sizing = DialogFrameConfig::new(&item.name, 0)
        .min_width(MIN_WIDTH)
        .max_width(MAX_WIDTH);
    let text_width = dialog_rect(area, ctx, &sizing).width.saturating_sub(4) as usize;

    let body = body_lines(item, props.supplement, props.tick, text_width);
    let config = DialogFrameConfig {
        content_height: body.len() as u16 + 1,
        ..sizing
    };

    registry.register(area, ClickAction::DismissDetail);
    registry.register(dialog_rect(area, ctx, &config), ClickAction::ModalBody);

    let inner = render_dialog_frame(frame, area, ctx, &config);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let button_offset = (body.len() as u16).min(inner.height - 1);
    let body_area = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        height: button_offset,
        ..inner
    };
    frame.render_widget(Paragraph::new(body), body_area);

    let label_width = (CLOSE_LABEL.len() as u16).min(inner.width);
    let button = Rect::new(
        inner.x + (inner.width - label_width) / 2,
        inner.y + button_offset,
        label_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default()
                .fg(COLOR_BUTTON)
                .add_modifier(Modifier::BOLD),
        )),
        button,
    );
    registry.register(button, ClickAction::CloseDetail);
}

fn body_lines(
    item: &Item,
    supplement: Option<LoaderView<'_, ItemSupplement>>,
    tick: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_words(&item.details, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(COLOR_ACCENT))))
        .collect();
    lines.push(Line::from(""));

    match supplement.and_then(|view| view.result) {
        Some(supplement) => {
            lines.extend(supplement.image.iter().map(|row| {
                Line::from(Span::styled(row.clone(), Style::default().fg(COLOR_PICTURE)))
            }));
            lines.push(Line::from(Span::styled(
                supplement.caption.clone(),
                Style::default().fg(COLOR_DIM),
            )));
        }
        None => lines.push(spinner_line("Loading...", tick)),
    }
    lines.push(Line::from(""));
    lines
}
