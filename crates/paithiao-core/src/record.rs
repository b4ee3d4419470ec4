//! Loosely-typed place record.
//!
//! Rows come back from the store as open JSON objects whose fields were
//! entered by hand upstream: keys may be missing, misspelled, and values
//! may be strings where numbers are expected. `PlaceRecord` wraps the
//! raw object and exposes typed accessors; coordinate extraction lives
//! in [`crate::geo`] because it has its own fallback policy.

use serde_json::Value;

/// A single row from any category table, kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord(Value);

impl PlaceRecord {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw field lookup. Returns `None` for missing keys and for
    /// non-object records.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Row identifier rendered as a string; the store is inconsistent
    /// about whether ids are numbers or strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.str_field("district")
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.str_field("image_url")
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.str_field("phone")
    }

    /// Event categories only; plain display text upstream, not a timestamp.
    #[must_use]
    pub fn event_time(&self) -> Option<&str> {
        self.str_field("event_time")
    }
}

impl From<Value> for PlaceRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
