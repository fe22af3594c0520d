//! Selection state machine.
//!
//! The shell is either browsing the list or viewing one item. The detail
//! view exists only while an item is selected, so visibility cannot drift
//! from the selection.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::catalog::supplement_for;
use crate::loader::{LoadTicket, Loader};
use crate::models::{Item, ItemSupplement};

use super::AppMessage;

/// Which of the two shell states is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    Browsing,
    Viewing,
}

/// A mounted detail view: the selected item plus its nested loader.
///
/// Dropping the view drops the loader, which cancels its timer.
#[derive(Debug)]
pub struct DetailView {
    item: Item,
    supplement: Loader<ItemSupplement>,
}

impl DetailView {
    pub fn new(item: Item, delay: Duration) -> Self {
        let supplement = Loader::new(supplement_for(&item), delay);
        Self { item, supplement }
    }

    /// Start the supplement fetch.
    pub fn mount(&mut self, tx: UnboundedSender<AppMessage>) {
        debug!(item_id = self.item.id, ticket = %self.supplement.ticket(), "detail view mounted");
        self.supplement.start(tx, |ticket, supplement| AppMessage::SupplementLoaded {
            ticket,
            supplement,
        });
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn supplement(&self) -> &Loader<ItemSupplement> {
        &self.supplement
    }
}

/// Owner of the view state.
#[derive(Debug)]
pub struct Shell {
    detail: Option<DetailView>,
    detail_delay: Duration,
    message_tx: UnboundedSender<AppMessage>,
}

impl Shell {
    pub fn new(message_tx: UnboundedSender<AppMessage>, detail_delay: Duration) -> Self {
        Self {
            detail: None,
            detail_delay,
            message_tx,
        }
    }

    pub fn mode(&self) -> ShellMode {
        if self.detail.is_some() {
            ShellMode::Viewing
        } else {
            ShellMode::Browsing
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.detail.as_ref().map(DetailView::item)
    }

    pub fn detail_visible(&self) -> bool {
        self.detail.is_some()
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Open the detail view for `item`, replacing any view already open.
    ///
    /// The replaced view is dropped, so its pending fetch never lands.
    /// Needs a tokio runtime.
    pub fn select_item(&mut self, item: Item) {
        let mut view = DetailView::new(item, self.detail_delay);
        view.mount(self.message_tx.clone());

        let item_id = view.item.id;
        match self.detail.replace(view) {
            Some(previous) => debug!(
                from = previous.item.id,
                to = item_id,
                "selection replaced"
            ),
            None => debug!(item_id, "browsing -> viewing"),
        }
    }

    /// Return to browsing. Safe to call in either state.
    pub fn close_detail(&mut self) {
        if let Some(view) = self.detail.take() {
            debug!(item_id = view.item.id, "viewing -> browsing");
        }
    }

    /// Apply a supplement completion to the mounted view.
    ///
    /// Returns `false` when no view is mounted or the ticket belongs to a
    /// view that has since been torn down.
    pub fn apply_supplement(&mut self, ticket: LoadTicket, supplement: ItemSupplement) -> bool {
        match self.detail.as_mut() {
            Some(view) => view.supplement.complete(ticket, supplement),
            None => {
                warn!(%ticket, "supplement arrived with no detail view mounted");
                false
            }
        }
    }

    /// Whether the mounted view is still waiting on its supplement
    pub fn is_loading(&self) -> bool {
        self.detail
            .as_ref()
            .is_some_and(|view| view.supplement.is_loading())
    }
}
