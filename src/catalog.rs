//! In-memory sample catalog.
//!
//! The storefront has no backend: every "fetch" resolves to the data defined
//! here. The item order is the display order.

use crate::models::{Item, ItemId, ItemSupplement};

/// Store title shown above the item list
pub const STORE_TITLE: &str = "Cool Hat Store";

const SAMPLE_ITEMS: &[(ItemId, &str, &str)] = &[
    (
        1,
        "Classic Fedora",
        "Wool felt fedora with a pinched crown and a grosgrain band.",
    ),
    (
        2,
        "Straw Boater",
        "Stiff sennit straw with a flat brim. Made for summer regattas.",
    ),
    (
        3,
        "Top Hat",
        "Tall silk plush crown. Pairs well with a cane and questionable plans.",
    ),
    (
        4,
        "Knit Beanie",
        "Chunky merino rib knit, folded cuff, one size fits most heads.",
    ),
    (
        5,
        "Bucket Hat",
        "Washed cotton twill with a downward brim and stitched eyelets.",
    ),
    (
        6,
        "Cowboy Hat",
        "Cattleman crease, wide brim, leather sweatband. Spurs sold separately.",
    ),
];

const BRIMMED: [&str; 3] = [
    "     .-----.     ",
    "   _/_______\\_   ",
    "  (___________)  ",
];

const TALL: [&str; 3] = [
    "     _______     ",
    "    |_______|    ",
    "  ___|_____|___  ",
];

const SOFT: [&str; 3] = [
    "      .---.      ",
    "     /     \\     ",
    "    (_______)    ",
];

/// The sample items in display order.
pub fn sample_items() -> Vec<Item> {
    SAMPLE_ITEMS
        .iter()
        .map(|(id, name, details)| Item::new(*id, *name, *details))
        .collect()
}

/// Look up a sample item by id.
pub fn find_item(id: ItemId) -> Option<Item> {
    SAMPLE_ITEMS
        .iter()
        .find(|(item_id, _, _)| *item_id == id)
        .map(|(id, name, details)| Item::new(*id, *name, *details))
}

/// Build the supplement the detail modal loads for `item`.
///
/// Deterministic per item id, so reopening an item shows the same picture.
pub fn supplement_for(item: &Item) -> ItemSupplement {
    let art = match item.id % 3 {
        0 => &TALL,
        1 => &BRIMMED,
        _ => &SOFT,
    };

    let days = 1 + item.id % 4;
    let plural = if days == 1 { "" } else { "s" };

    ItemSupplement {
        item_id: item.id,
        image: art.iter().map(|row| row.to_string()).collect(),
        caption: format!("Handmade · ships in {} day{}", days, plural),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_items_have_unique_ids() {
        let items = sample_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_sample_items_preserve_order() {
        let ids: Vec<_> = sample_items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(3).map(|i| i.name), Some("Top Hat".to_string()));
        assert!(find_item(99).is_none());
    }

    #[test]
    fn test_supplement_is_tied_to_item() {
        let item = find_item(4).unwrap();
        let supplement = supplement_for(&item);
        assert_eq!(supplement.item_id, 4);
        assert_eq!(supplement.image_height(), 3);
        assert_eq!(supplement.caption, "Handmade · ships in 1 day");
    }

    #[test]
    fn test_supplement_is_deterministic() {
        let item = find_item(2).unwrap();
        assert_eq!(supplement_for(&item), supplement_for(&item));
    }
}
