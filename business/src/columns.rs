//! Column definitions for the users table.
//!
//! Each column is plain data: a key, a header label, an accessor producing
//! the cell text, and an optional filter predicate. Sorting and global
//! filtering both work on the accessor text.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::user::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    Name,
    Email,
    Location,
}

pub type Accessor = for<'a> fn(&'a UserRecord) -> Cow<'a, str>;

/// Receives the record and the raw filter value.
pub type FilterPredicate = fn(&UserRecord, &str) -> bool;

#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub label: &'static str,
    pub accessor: Accessor,
    pub filter: Option<FilterPredicate>,
}

impl ColumnDef {
    pub fn text<'a>(&self, record: &'a UserRecord) -> Cow<'a, str> {
        (self.accessor)(record)
    }

    pub fn can_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Columns without a predicate let every row through.
    pub fn matches_filter(&self, record: &UserRecord, value: &str) -> bool {
        self.filter.is_none_or(|filter| filter(record, value))
    }

    /// Lexicographic order on the lower-cased cell text.
    pub fn compare(&self, a: &UserRecord, b: &UserRecord) -> Ordering {
        self.text(a).to_lowercase().cmp(&self.text(b).to_lowercase())
    }
}

pub const COLUMNS: [ColumnDef; 3] = [
    ColumnDef {
        key: ColumnKey::Name,
        label: "Name",
        accessor: name_text,
        filter: Some(name_filter),
    },
    ColumnDef {
        key: ColumnKey::Email,
        label: "Email",
        accessor: email_text,
        filter: Some(email_filter),
    },
    ColumnDef {
        key: ColumnKey::Location,
        label: "Location",
        accessor: location_text,
        filter: None,
    },
];

pub fn column(key: ColumnKey) -> &'static ColumnDef {
    match key {
        ColumnKey::Name => &COLUMNS[0],
        ColumnKey::Email => &COLUMNS[1],
        ColumnKey::Location => &COLUMNS[2],
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn name_text(record: &UserRecord) -> Cow<'_, str> {
    Cow::Owned(record.full_name())
}

fn email_text(record: &UserRecord) -> Cow<'_, str> {
    Cow::Borrowed(&record.email)
}

fn location_text(record: &UserRecord) -> Cow<'_, str> {
    Cow::Owned(record.location_label())
}

fn name_filter(record: &UserRecord, value: &str) -> bool {
    contains_ignore_case(&record.full_name(), value)
}

fn email_filter(record: &UserRecord, value: &str) -> bool {
    contains_ignore_case(&record.email, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::user;

    #[test]
    fn lookup_by_key_matches_definition() {
        for def in &COLUMNS {
            assert_eq!(column(def.key).key, def.key);
        }
        assert_eq!(column(ColumnKey::Location).label, "Location");
    }

    #[test]
    fn accessors_render_cell_text() {
        let record = user("John", "Smith", "john@gmail.com", "Leeds", "United Kingdom");

        assert_eq!(column(ColumnKey::Name).text(&record), "John Smith");
        assert_eq!(column(ColumnKey::Email).text(&record), "john@gmail.com");
        assert_eq!(
            column(ColumnKey::Location).text(&record),
            "Leeds, United Kingdom"
        );
    }

    #[test]
    fn name_filter_spans_first_and_last() {
        let record = user("John", "Smith", "j@example.com", "Leeds", "UK");
        let name = column(ColumnKey::Name);

        assert!(name.matches_filter(&record, "n sm"));
        assert!(name.matches_filter(&record, "JOHN"));
        assert!(!name.matches_filter(&record, "jane"));
    }

    #[test]
    fn location_has_no_filter() {
        let record = user("John", "Smith", "j@example.com", "Leeds", "UK");
        let location = column(ColumnKey::Location);

        assert!(!location.can_filter());
        assert!(location.matches_filter(&record, "nowhere"));
    }

    #[test]
    fn compare_ignores_case() {
        let a = user("alice", "z", "a@x", "c", "c");
        let b = user("Bob", "a", "b@x", "c", "c");

        assert_eq!(column(ColumnKey::Name).compare(&a, &b), Ordering::Less);
    }
}
