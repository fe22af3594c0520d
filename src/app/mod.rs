//! Application state for the storefront TUI.
//!
//! - [`App`] - everything the event loop and renderer touch
//! - [`Shell`] / [`ShellMode`] - the browsing/viewing state machine
//! - [`AppMessage`] - completions delivered from loader tasks

mod handlers;
mod messages;
mod navigation;
mod shell;

pub use messages::AppMessage;
pub use shell::{DetailView, Shell, ShellMode};

use tokio::sync::mpsc;
use tracing::info;

use crate::catalog;
use crate::config::StoreConfig;
use crate::loader::Loader;
use crate::models::Item;
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    pub config: StoreConfig,
    /// Simulated fetch of the item collection
    pub catalog: Loader<Vec<Item>>,
    /// Selection and the mounted detail view
    pub shell: Shell,
    /// Index of the highlighted list entry (keyboard cursor)
    pub highlighted: usize,
    /// First visible list entry, written back by the renderer
    pub list_scroll: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw
    pub needs_redraw: bool,
    /// Tick counter for spinner animation
    pub tick_count: u64,
    /// Receiver for loader completions, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for loader completions (cloned into each loader task)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
}

impl App {
    /// Create an app over the built-in sample catalog.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_items(config, catalog::sample_items())
    }

    /// Create an app whose catalog fetch resolves to `items`.
    pub fn with_items(config: StoreConfig, items: Vec<Item>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let catalog = Loader::new(items, config.catalog_delay);
        let shell = Shell::new(message_tx.clone(), config.detail_delay);

        Self {
            config,
            catalog,
            shell,
            highlighted: 0,
            list_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            hit_registry: HitAreaRegistry::new(),
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Kick off the catalog fetch. Needs a tokio runtime.
    pub fn start(&mut self) {
        info!(
            delay_ms = self.config.catalog_delay.as_millis() as u64,
            "loading catalog"
        );
        self.catalog
            .start(self.message_tx.clone(), |ticket, items| {
                AppMessage::CatalogLoaded { ticket, items }
            });
    }

    /// Loaded items, or `None` while the catalog is loading
    pub fn items(&self) -> Option<&[Item]> {
        self.catalog.result().map(Vec::as_slice)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.shell.selected_item()
    }

    pub fn detail_visible(&self) -> bool {
        self.shell.detail_visible()
    }

    pub fn mode(&self) -> ShellMode {
        self.shell.mode()
    }

    /// Open the detail view for `item`.
    pub fn select_item(&mut self, item: Item) {
        if let Some(index) = self
            .items()
            .and_then(|items| items.iter().position(|i| i.id == item.id))
        {
            self.highlighted = index;
        }
        self.shell.select_item(item);
        self.mark_dirty();
    }

    /// Return to the list.
    pub fn close_detail(&mut self) {
        self.shell.close_detail();
        self.mark_dirty();
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether any loader is still waiting
    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading() || self.shell.is_loading()
    }

    /// Advance the animation clock. Spinners only move while something loads.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}
