//! Structured key/value records that bindings are read from
//!
//! The game data reader lives elsewhere. Bindings only need string lookups
//! by field label, so any map-shaped record can stand in for it.

use std::collections::{BTreeMap, HashMap};

/// A record whose string fields can be looked up by label
pub trait FieldRecord {
    /// String value of a field, or `None` if absent or not a string
    fn get_string(&self, field: &str) -> Option<&str>;

    /// String value of a field, falling back to `default` when absent
    fn get_string_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
        self.get_string(field).unwrap_or(default)
    }

    /// Returns true if the record has a string value for the field
    fn has_field(&self, field: &str) -> bool {
        self.get_string(field).is_some()
    }
}

impl<T: FieldRecord + ?Sized> FieldRecord for &T {
    fn get_string(&self, field: &str) -> Option<&str> {
        (**self).get_string(field)
    }
}

impl<S: std::hash::BuildHasher> FieldRecord for HashMap<String, String, S> {
    fn get_string(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldRecord for BTreeMap<String, String> {
    fn get_string(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FieldRecord for toml::Table {
    fn get_string(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(|v| v.as_str())
    }
}

impl FieldRecord for serde_json::Map<String, serde_json::Value> {
    fn get_string(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(|v| v.as_str())
    }
}
