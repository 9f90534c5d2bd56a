use egui::{TextEdit, Ui};
use roster_business::TableState;

/// Global filter input, matched against every column.
pub fn search_bar(ui: &mut Ui, table: &mut TableState) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            TextEdit::singleline(table.global_filter_mut())
                .hint_text("Name, email or location")
                .desired_width(280.0),
        );
        if table.filters.is_active() && ui.button("Clear filters").clicked() {
            table.filters = Default::default();
        }
    });
}
