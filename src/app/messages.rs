//! Messages delivered to the event loop from background tasks.

use crate::loader::LoadTicket;
use crate::models::{Item, ItemSupplement};

/// Completion of a simulated fetch, tagged with the ticket of the loader
/// that started it.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The item list finished loading
    CatalogLoaded { ticket: LoadTicket, items: Vec<Item> },
    /// A detail view's supplementary payload finished loading
    SupplementLoaded {
        ticket: LoadTicket,
        supplement: ItemSupplement,
    },
}

impl AppMessage {
    pub fn ticket(&self) -> LoadTicket {
        match self {
            AppMessage::CatalogLoaded { ticket, .. } => *ticket,
            AppMessage::SupplementLoaded { ticket, .. } => *ticket,
        }
    }

    /// Short label for logging
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::CatalogLoaded { .. } => "catalog_loaded",
            AppMessage::SupplementLoaded { .. } => "supplement_loaded",
        }
    }
}
