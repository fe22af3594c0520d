//! Message and input handling for the App.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, info};

use crate::ui::interaction::handle_click_action;

use super::{App, AppMessage, ShellMode};

impl App {
    /// Handle an incoming async message.
    /// Every message can change what is on screen, so the app is marked dirty.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        debug!(kind = msg.kind(), ticket = %msg.ticket(), "message received");

        match msg {
            AppMessage::CatalogLoaded { ticket, items } => {
                let count = items.len();
                if self.catalog.complete(ticket, items) {
                    info!(count, "catalog loaded");
                    self.clamp_highlight();
                }
            }
            AppMessage::SupplementLoaded { ticket, supplement } => {
                let item_id = supplement.item_id;
                if self.shell.apply_supplement(ticket, supplement) {
                    info!(item_id, "supplement loaded");
                }
            }
        }
    }

    /// Handle one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Resize(width, height) => self.update_terminal_dimensions(width, height),
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) if self.config.mouse => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.mode() {
            ShellMode::Viewing => match key.code {
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => self.close_detail(),
                _ => {}
            },
            ShellMode::Browsing => match key.code {
                KeyCode::Char('q') => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.highlight_previous(),
                KeyCode::Down | KeyCode::Char('j') => self.highlight_next(),
                KeyCode::Home => self.highlight_first(),
                KeyCode::End => self.highlight_last(),
                KeyCode::Enter => self.select_highlighted(),
                _ => {}
            },
        }
    }

    /// Handle a mouse event against the hit areas from the last render.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::ScrollDown if self.mode() == ShellMode::Browsing => {
                self.highlight_next()
            }
            MouseEventKind::ScrollUp if self.mode() == ShellMode::Browsing => {
                self.highlight_previous()
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_items, supplement_for};
    use crate::config::StoreConfig;
    use crate::ui::interaction::ClickAction;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(StoreConfig::default());
        let ticket = app.catalog.ticket();
        app.handle_message(AppMessage::CatalogLoaded {
            ticket,
            items: sample_items(),
        });
        app
    }

    #[test]
    fn test_catalog_message_completes_loader() {
        let app = loaded_app();
        assert_eq!(app.items().map(<[_]>::len), Some(6));
    }

    #[test]
    fn test_foreign_catalog_ticket_is_ignored() {
        let mut app = App::new(StoreConfig::default());
        let other = App::new(StoreConfig::default());
        app.handle_message(AppMessage::CatalogLoaded {
            ticket: other.catalog.ticket(),
            items: Vec::new(),
        });
        assert!(app.items().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_supplement_message_reaches_mounted_view() {
        let mut app = loaded_app();
        let item = sample_items()[2].clone();
        app.select_item(item.clone());

        let ticket = app.shell.detail().unwrap().supplement().ticket();
        app.handle_message(AppMessage::SupplementLoaded {
            ticket,
            supplement: supplement_for(&item),
        });

        let view = app.shell.detail().unwrap();
        assert_eq!(view.supplement().result(), Some(&supplement_for(&item)));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = loaded_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_q_closes_detail_before_quitting() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.mode(), ShellMode::Viewing);

        app.handle_key(key(KeyCode::Char('q')));
        assert_eq!(app.mode(), ShellMode::Browsing);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_and_c_close_detail() {
        let mut app = loaded_app();
        for code in [KeyCode::Esc, KeyCode::Char('c')] {
            app.handle_key(key(KeyCode::Enter));
            assert!(app.detail_visible());
            app.handle_key(key(code));
            assert!(app.selected_item().is_none());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_keys_ignored_while_viewing() {
        let mut app = loaded_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.highlighted, 0);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = loaded_app();
        let mut release = key(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        app.handle_event(Event::Key(release));
        assert!(!app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_dispatches_registered_action() {
        let mut app = loaded_app();
        let item = sample_items()[1].clone();
        app.hit_registry
            .register(Rect::new(0, 5, 20, 2), ClickAction::SelectItem(item.clone()));

        app.handle_mouse(click(3, 6));
        assert_eq!(app.selected_item(), Some(&item));
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let mut app = App::new(StoreConfig::default().with_mouse(false));
        app.hit_registry.register(Rect::new(0, 0, 10, 10), ClickAction::CloseDetail);
        app.needs_redraw = false;
        app.handle_event(Event::Mouse(click(1, 1)));
        assert!(!app.needs_redraw);
    }
}
