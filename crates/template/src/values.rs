//! Field values supplied at render time

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single field value
///
/// Deserialized untagged, so a values JSON document can mix plain strings,
/// numbers and ISO dates: `{"payee": "Jane Doe", "amount": 12500.5}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl FieldValue {
    /// Whether this value renders as nothing
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// Map of field id to value
///
/// Missing ids and empty text are skipped by the renderer; ids with no
/// matching field in the template are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<String, FieldValue>,
}

impl FieldValues {
    /// Create an empty value map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse field values from a JSON object
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set a value for a field id
    pub fn set(&mut self, id: &str, value: impl Into<FieldValue>) {
        self.values.insert(id.to_string(), value.into());
    }

    /// Set a text value
    pub fn set_text(&mut self, id: &str, text: &str) {
        self.set(id, text);
    }

    /// Set a numeric value
    pub fn set_number(&mut self, id: &str, n: f64) {
        self.set(id, n);
    }

    /// Set a date value
    pub fn set_date(&mut self, id: &str, date: NaiveDate) {
        self.set(id, date);
    }

    /// Get the value for a field id
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Iterate over (id, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
