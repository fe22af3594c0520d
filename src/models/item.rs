/// Stable identifier of a catalog item
pub type ItemId = u32;

/// A single storefront record.
///
/// Items come from the in-memory sample catalog and are never mutated after
/// construction. The whole record is handed around by value when a list entry
/// is activated, so cloning is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Unique, stable identifier
    pub id: ItemId,
    /// Display name shown in the list and as the modal heading
    pub name: String,
    /// Longer description
    pub details: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: ItemId, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_new_converts_strings() {
        let item = Item::new(7, "Bowler", "Hard felt, rounded crown");
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Bowler");
        assert_eq!(item.details, "Hard felt, rounded crown");
    }

    #[test]
    fn test_items_compare_by_value() {
        let a = Item::new(1, "Fedora", "Wool");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Item::new(2, "Fedora", "Wool"));
    }
}
