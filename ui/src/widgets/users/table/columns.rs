//! Column widths for the users table.

use egui_extras::Column;
use roster_business::{COLUMNS, ColumnKey};

pub const ROW_HEIGHT: f32 = 28.0;
/// Room for the sort button plus a filter input.
pub const HEADER_HEIGHT: f32 = 56.0;

/// One egui column per business column, in the same order.
#[inline]
pub fn table_columns() -> Vec<Column> {
    COLUMNS
        .iter()
        .map(|def| match def.key {
            ColumnKey::Name => Column::initial(180.0).at_least(120.0),
            ColumnKey::Email => Column::initial(260.0).at_least(160.0),
            ColumnKey::Location => Column::remainder().at_least(140.0),
        })
        .collect()
}
