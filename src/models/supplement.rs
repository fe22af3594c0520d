use super::ItemId;

/// Extra display data fetched lazily by the detail modal.
///
/// Stands in for what would be an image request in a networked storefront:
/// a few lines of ASCII art plus a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSupplement {
    /// The item this supplement belongs to
    pub item_id: ItemId,
    /// Picture rows, top to bottom
    pub image: Vec<String>,
    /// One-line caption rendered under the picture
    pub caption: String,
}

impl ItemSupplement {
    /// Height of the picture in rows
    pub fn image_height(&self) -> usize {
        self.image.len()
    }
}
