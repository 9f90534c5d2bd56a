//! Back/forward buttons for the native window, which has no address bar.

use egui::{Button, Ui};
use roster_states::StateCtx;

use crate::location::Location;

pub fn history_buttons(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let location = state_ctx.state_mut::<Location>();

    if ui
        .add_enabled(location.can_go_back(), Button::new("Back"))
        .clicked()
    {
        location.back();
    }
    if ui
        .add_enabled(location.can_go_forward(), Button::new("Forward"))
        .clicked()
    {
        location.forward();
    }
}
