//! Row rendering for the users table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::{COLUMNS, UserRecord};

/// Renders one record, a cell per column.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &UserRecord) {
    for def in &COLUMNS {
        row.col(|ui| {
            ui.label(def.text(record).as_ref());
            draw_cell_bottom_border(ui);
        });
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
