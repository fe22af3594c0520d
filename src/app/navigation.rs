//! List highlight movement.

use super::App;

impl App {
    fn item_count(&self) -> usize {
        self.items().map_or(0, <[_]>::len)
    }

    pub fn highlight_next(&mut self) {
        let count = self.item_count();
        if count > 0 && self.highlighted + 1 < count {
            self.highlighted += 1;
            self.mark_dirty();
        }
    }

    pub fn highlight_previous(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
            self.mark_dirty();
        }
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = 0;
        self.mark_dirty();
    }

    pub fn highlight_last(&mut self) {
        self.highlighted = self.item_count().saturating_sub(1);
        self.mark_dirty();
    }

    /// Keep the highlight inside the loaded collection.
    pub fn clamp_highlight(&mut self) {
        self.highlighted = self.highlighted.min(self.item_count().saturating_sub(1));
    }

    /// Select the highlighted entry. Does nothing while the list is loading.
    pub fn select_highlighted(&mut self) {
        let item = self
            .items()
            .and_then(|items| items.get(self.highlighted))
            .cloned();
        if let Some(item) = item {
            self.select_item(item);
        }
    }
}
