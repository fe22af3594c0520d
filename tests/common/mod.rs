//! Shared helpers for integration tests.
#![allow(dead_code)]

use hatstore::app::{App, AppMessage};
use hatstore::config::StoreConfig;
use hatstore::ui;
use hatstore::ui::interaction::ClickAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// App with default delays whose message receiver has been taken, so the
/// test can drive completions by hand.
pub fn app_with_receiver(config: StoreConfig) -> (App, UnboundedReceiver<AppMessage>) {
    let mut app = App::new(config);
    let rx = app.message_rx.take().expect("receiver present on new app");
    app.update_terminal_dimensions(WIDTH, HEIGHT);
    (app, rx)
}

/// Await the next loader completion and apply it.
pub async fn deliver_next(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    let msg = rx.recv().await.expect("message channel open");
    app.handle_message(msg.clone());
    msg
}

pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Draw one frame of the app and return it as text.
pub fn render_app(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");
    app.needs_redraw = false;
    buffer_text(&terminal)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Top-left cell of the first hit area registered for `action`.
pub fn position_of(app: &App, action: &ClickAction) -> Option<(u16, u16)> {
    app.hit_registry
        .areas()
        .iter()
        .find(|area| &area.action == action)
        .map(|area| (area.rect.x, area.rect.y))
}
