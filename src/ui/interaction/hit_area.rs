//! Hit area registry.
//!
//! Areas are registered during rendering and cleared at the start of each
//! frame. Later registrations sit on top of earlier ones.

use ratatui::layout::Rect;

use crate::models::Item;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open the detail view for this item
    SelectItem(Item),
    /// The modal's close control
    CloseDetail,
    /// Click on the backdrop outside the modal
    DismissDetail,
    /// Click inside the modal that hits nothing interactive
    ModalBody,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry for managing hit areas across the UI.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area on top of the existing ones.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
