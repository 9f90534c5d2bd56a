//! The users screen: search bar, table and pagination.

use egui::{Color32, Response, Ui};
use roster_business::{UsersPage, UsersView};
use roster_states::StateCtx;

use super::pagination::{PaginationActions, pagination_bar};
use super::search::search_bar;
use super::table::users_table;
use crate::location::Location;

/// Draws the users screen from the [`UsersPage`] in `state_ctx`.
///
/// Filter and sort edits are made on a copy of the table state and written
/// back after the frame, so they show from the next frame on. Pagination
/// pushes the new URL onto the [`Location`].
pub fn users_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut navigate_to = None;

    let response = ui.vertical(|ui| {
        let page = state_ctx.state_mut::<UsersPage>();
        let mut table = page.table().clone();

        search_bar(ui, &mut table);
        ui.add_space(8.0);

        let mut actions = PaginationActions::default();
        let mut retry = false;
        match page.view() {
            UsersView::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading...");
                });
            }
            UsersView::Error(message) => {
                ui.colored_label(Color32::RED, format!("Error: {message}"));
                retry = ui.button("Retry").clicked();
            }
            UsersView::Ready(ready) => {
                users_table(ui, &mut table, &ready.rows);
                ui.add_space(8.0);
                actions = pagination_bar(ui, &ready);
            }
        }

        if retry {
            page.retry();
        }
        if actions.previous {
            navigate_to = page.previous();
        } else if actions.next {
            navigate_to = page.next();
        }

        if *page.table() != table {
            *page.table_mut() = table;
            ui.ctx().request_repaint();
        }
    });

    if let Some(url) = navigate_to {
        state_ctx.state_mut::<Location>().push(&url);
        ui.ctx().request_repaint();
    }

    response.response
}
