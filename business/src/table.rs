//! Filter and sort state for the users table.
//!
//! `TableState` never touches the network. Given the records of the page on
//! screen it derives, deterministically, which rows are visible and in what
//! order:
//! - every non-empty filter must match (global filter and per-column filters
//!   are ANDed)
//! - at most one column is sorted; ties keep fetch order
//!
//! Filters are kept when the page changes.

use std::collections::BTreeMap;

use crate::columns::{COLUMNS, ColumnKey, column, contains_ignore_case};
use crate::user::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

/// Ordered sort keys, limited to a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn active(&self) -> Option<SortKey> {
        self.keys.first().copied()
    }

    pub fn direction_of(&self, column: ColumnKey) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// none -> ascending -> descending -> none on the same column. A click on
    /// another column replaces the current sort with ascending on that column.
    pub fn toggle(&mut self, column: ColumnKey) {
        let next = match self.direction_of(column) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.keys.clear();
        if let Some(direction) = next {
            self.keys.push(SortKey { column, direction });
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub global: String,
    pub per_column: BTreeMap<ColumnKey, String>,
}

impl FilterState {
    pub fn column(&self, key: ColumnKey) -> &str {
        self.per_column.get(&key).map_or("", String::as_str)
    }

    pub fn is_active(&self) -> bool {
        !self.global.is_empty() || self.per_column.values().any(|value| !value.is_empty())
    }

    fn matches(&self, record: &UserRecord) -> bool {
        if !self.global.is_empty()
            && !COLUMNS
                .iter()
                .any(|def| contains_ignore_case(&def.text(record), &self.global))
        {
            return false;
        }

        self.per_column
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .all(|(key, value)| column(*key).matches_filter(record, value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub filters: FilterState,
    pub sort: SortState,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_global_filter(&mut self, value: impl Into<String>) {
        self.filters.global = value.into();
    }

    pub fn global_filter_mut(&mut self) -> &mut String {
        &mut self.filters.global
    }

    pub fn set_column_filter(&mut self, key: ColumnKey, value: impl Into<String>) {
        self.filters.per_column.insert(key, value.into());
    }

    /// Edit buffer for a column's filter input.
    pub fn column_filter_mut(&mut self, key: ColumnKey) -> &mut String {
        self.filters.per_column.entry(key).or_default()
    }

    pub fn toggle_sort(&mut self, key: ColumnKey) {
        self.sort.toggle(key);
    }

    pub fn sort_direction(&self, key: ColumnKey) -> Option<SortDirection> {
        self.sort.direction_of(key)
    }

    /// Indices into `records` of the rows to render, in render order.
    pub fn visible_indices(&self, records: &[UserRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.filters.matches(record))
            .map(|(index, _)| index)
            .collect();

        if let Some(SortKey { column: key, direction }) = self.sort.active() {
            let def = column(key);
            // `sort_by` is stable, so equal rows stay in fetch order.
            indices.sort_by(|&a, &b| {
                let ordering = def.compare(&records[a], &records[b]);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        indices
    }

    pub fn visible_rows<'a>(&self, records: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        self.visible_indices(records)
            .into_iter()
            .map(|index| &records[index])
            .collect()
    }
}
