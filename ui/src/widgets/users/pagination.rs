//! Previous / next controls under the users table.

use egui::{Button, Ui};
use roster_business::ReadyView;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaginationActions {
    pub previous: bool,
    pub next: bool,
}

/// Buttons are disabled at either end of the known page range.
pub fn pagination_bar(ui: &mut Ui, view: &ReadyView<'_>) -> PaginationActions {
    ui.horizontal(|ui| {
        let previous = ui
            .add_enabled(view.can_previous, Button::new("Previous"))
            .clicked();
        ui.label(format!("Page {} of {}", view.page_number, view.total_pages));
        let next = ui.add_enabled(view.can_next, Button::new("Next")).clicked();

        if view.is_fetching {
            ui.spinner();
        }

        PaginationActions { previous, next }
    })
    .inner
}
