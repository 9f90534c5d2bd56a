//! User records as delivered by the listing source.
//!
//! Only the fields the screen shows are modelled; everything else in the
//! payload is ignored on deserialization.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLocation {
    pub city: String,
    pub country: String,
}

/// One row of the users table. Rows have no id of their own; within a page
/// they are identified by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: UserName,
    pub email: String,
    pub location: UserLocation,
}

impl UserRecord {
    /// `"{first} {last}"`, the text the Name column shows, filters and sorts on.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// `"{city}, {country}"`.
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.location.city, self.location.country)
    }

    /// Identifier derived from the lower-cased email, for features that need
    /// identity across pages or refetches.
    pub fn stable_key(&self) -> Ustr {
        Ustr::from(&self.email.trim().to_lowercase())
    }
}

#[cfg(test)]
pub(crate) fn user(first: &str, last: &str, email: &str, city: &str, country: &str) -> UserRecord {
    UserRecord {
        name: UserName {
            first: first.to_owned(),
            last: last.to_owned(),
        },
        email: email.to_owned(),
        location: UserLocation {
            city: city.to_owned(),
            country: country.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_text() {
        let record = user("John", "Smith", "john.smith@example.com", "Leeds", "United Kingdom");

        assert_eq!(record.full_name(), "John Smith");
        assert_eq!(record.location_label(), "Leeds, United Kingdom");
    }

    #[test]
    fn stable_key_ignores_email_case() {
        let a = user("A", "B", "Ann.Lee@Example.com", "x", "y");
        let b = user("C", "D", "ann.lee@example.com ", "x", "y");

        assert_eq!(a.stable_key(), b.stable_key());
    }

    #[test]
    fn deserializes_source_payload_ignoring_extra_fields() {
        let json = serde_json::json!({
            "gender": "female",
            "name": { "title": "Ms", "first": "Ella", "last": "Brown" },
            "location": {
                "street": { "number": 1, "name": "Main St" },
                "city": "Auckland",
                "state": "Auckland",
                "country": "New Zealand",
                "postcode": 12345
            },
            "email": "ella.brown@example.com",
            "login": { "uuid": "5f6c" }
        });

        let record: UserRecord = serde_json::from_value(json).expect("source payload parses");
        assert_eq!(record.full_name(), "Ella Brown");
        assert_eq!(record.location_label(), "Auckland, New Zealand");
        assert_eq!(record.email, "ella.brown@example.com");
    }
}
