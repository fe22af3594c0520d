//! Mouse interaction for the storefront.
//!
//! Components register hit areas while rendering; the event loop hit-tests
//! clicks against them and dispatches the resulting [`ClickAction`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
