//! Click action handler.
//!
//! Translates actions from the hit area registry into App transitions.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectItem(item) => {
            tracing::debug!("Click: SelectItem(id={})", item.id);
            app.select_item(item);
        }
        ClickAction::CloseDetail => {
            tracing::debug!("Click: CloseDetail");
            app.close_detail();
        }
        // Clicking outside the modal requests close, same as the button
        ClickAction::DismissDetail => {
            tracing::debug!("Click: DismissDetail - backdrop");
            app.close_detail();
        }
        ClickAction::ModalBody => {}
    }
}
