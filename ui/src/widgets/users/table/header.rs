//! Table header: a sort toggle per column and a filter input under the
//! columns that support one.

use egui::{Button, RichText, TextEdit, Ui};
use egui_extras::TableRow;
use roster_business::{COLUMNS, ColumnDef, SortDirection, TableState};

/// Renders every header cell, writing clicks and edits into `table`.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, table: &mut TableState) {
    for def in &COLUMNS {
        header.col(|ui| {
            render_header_cell(ui, def, table);
        });
    }
}

/// The text of a column's sort toggle, e.g. `Name ⬆`.
pub fn sort_label(def: &ColumnDef, direction: Option<SortDirection>) -> String {
    match direction {
        Some(SortDirection::Ascending) => format!("{} ⬆", def.label),
        Some(SortDirection::Descending) => format!("{} ⬇", def.label),
        None => def.label.to_owned(),
    }
}

fn render_header_cell(ui: &mut Ui, def: &ColumnDef, table: &mut TableState) {
    ui.vertical(|ui| {
        let label = sort_label(def, table.sort_direction(def.key));
        if ui
            .add(Button::new(RichText::new(label).strong()).frame(false))
            .on_hover_text("Click to sort")
            .clicked()
        {
            table.toggle_sort(def.key);
        }

        if def.can_filter() {
            ui.add(
                TextEdit::singleline(table.column_filter_mut(def.key))
                    .hint_text(format!("Filter {}", def.label.to_lowercase()))
                    .desired_width(f32::INFINITY),
            );
        }
    });
}
