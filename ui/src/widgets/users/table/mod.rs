//! Table components for the users screen.
//!
//! - `columns`: column widths
//! - `header`: sort toggles and per-column filter inputs
//! - `row`: one record per row

pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{TableState, UserRecord};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the header (editing `table`) and `rows` in the given order.
pub fn users_table(ui: &mut Ui, table: &mut TableState, rows: &[&UserRecord]) {
    let builder = table_columns().into_iter().fold(
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center)),
        |builder, column| builder.column(column),
    );

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, table);
        })
        .body(|mut body| {
            for record in rows {
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, record);
                });
            }
        });
}

#[cfg(test)]
mod users_table_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{ColumnKey, SortDirection, UserLocation, UserName};

    use super::*;

    struct Fixture {
        table: TableState,
        records: Vec<UserRecord>,
    }

    fn record(first: &str, last: &str, email: &str, city: &str) -> UserRecord {
        UserRecord {
            name: UserName {
                first: first.to_owned(),
                last: last.to_owned(),
            },
            email: email.to_owned(),
            location: UserLocation {
                city: city.to_owned(),
                country: "Norway".to_owned(),
            },
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            table: TableState::new(),
            records: vec![
                record("John", "Smith", "john@gmail.com", "Oslo"),
                record("Ada", "Byron", "ada@example.com", "Bergen"),
            ],
        }
    }

    fn harness<'a>() -> Harness<'a, Fixture> {
        Harness::new_ui_state(
            |ui, fixture: &mut Fixture| {
                let rows = fixture.table.visible_rows(&fixture.records);
                users_table(ui, &mut fixture.table, &rows);
            },
            fixture(),
        )
    }

    /// One frame to handle input, one to render the result.
    fn settle(harness: &mut Harness<'_, Fixture>) {
        harness.step();
        harness.step();
    }

    #[test]
    fn test_headers_and_cells_render() {
        let harness = harness();

        assert!(harness.query_by_label("Name").is_some(), "Name header");
        assert!(harness.query_by_label("Email").is_some(), "Email header");
        assert!(harness.query_by_label("Location").is_some(), "Location header");

        assert!(harness.query_by_label("John Smith").is_some());
        assert!(harness.query_by_label("ada@example.com").is_some());
        assert!(harness.query_by_label("Bergen, Norway").is_some());
    }

    #[test]
    fn test_clicking_header_cycles_sort() {
        let mut harness = harness();

        harness.get_by_label("Name").click();
        settle(&mut harness);
        assert_eq!(
            harness.state().table.sort_direction(ColumnKey::Name),
            Some(SortDirection::Ascending)
        );
        assert!(harness.query_by_label("Name ⬆").is_some());

        harness.get_by_label("Name ⬆").click();
        settle(&mut harness);
        assert_eq!(
            harness.state().table.sort_direction(ColumnKey::Name),
            Some(SortDirection::Descending)
        );

        harness.get_by_label("Name ⬇").click();
        settle(&mut harness);
        assert_eq!(harness.state().table.sort_direction(ColumnKey::Name), None);
    }

    #[test]
    fn test_filtered_rows_are_hidden() {
        let mut harness = harness();

        harness
            .state_mut()
            .table
            .set_column_filter(ColumnKey::Email, "gmail");
        settle(&mut harness);

        assert!(harness.query_by_label("John Smith").is_some());
        assert!(harness.query_by_label("Ada Byron").is_none());
    }
}
