mod item;
mod supplement;

pub use item::{Item, ItemId};
pub use supplement::ItemSupplement;
