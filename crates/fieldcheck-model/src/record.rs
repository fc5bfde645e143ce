//! Records and their statically declared field descriptors.
//!
//! A [`Record`] is an ordered list of [`FieldDescriptor`]s built explicitly by
//! the caller. Normalization never writes into a record directly; it returns
//! [`FieldChange`]s that the caller applies with [`Record::apply`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ModelError, Result};
use crate::tag::DataTypeTag;

/// Current value of a field.
///
/// Only strings are normalized or validated. Every other JSON value is kept
/// as parsed in [`FieldValue::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Other(Value),
}

impl FieldValue {
    /// Returns the text if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the text if this is a non-empty string value.
    pub fn as_non_empty_text(&self) -> Option<&str> {
        self.as_text().filter(|text| !text.is_empty())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Metadata and current value for one field of a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field identifier. [`Record`] keeps names unique.
    pub name: String,
    /// Declared semantic data type.
    #[serde(rename = "type", default)]
    pub tag: DataTypeTag,
    /// Read-only fields are never normalized or validated.
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub value: FieldValue,
    /// Label used in rejection messages. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Default country configured on this field's rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, tag: impl Into<DataTypeTag>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            read_only: false,
            value: FieldValue::Null,
            display_name: None,
            default_country: None,
        }
    }

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark the field as read-only.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    /// Name shown to users when this field fails validation.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Writable string value, or `None` if the field must be skipped.
    pub fn writable_text(&self) -> Option<&str> {
        if self.read_only {
            return None;
        }
        self.value.as_non_empty_text()
    }
}

/// A value rewrite produced by normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old_value: String,
    pub new_value: String,
}

/// An ordered set of uniquely named fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    fields: Vec<FieldDescriptor>,
}

#[derive(Deserialize)]
struct RecordFields {
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RecordFields> for Record {
    type Error = ModelError;

    fn try_from(raw: RecordFields) -> Result<Self> {
        Self::new(raw.fields)
    }
}

impl Record {
    /// Build a record, rejecting duplicate field names.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = fields.iter().find(|field| !seen.insert(field.name.as_str())) {
            return Err(ModelError::DuplicateField(duplicate.name.clone()));
        }
        Ok(Self { fields })
    }

    /// Add a field, replacing any existing field with the same name.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        match self.fields.iter_mut().find(|existing| existing.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of the first `Country` field that has one.
    pub fn country_value(&self) -> Option<&str> {
        self.fields
            .iter()
            .filter(|field| field.tag == DataTypeTag::Country)
            .filter_map(|field| field.value.as_text())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    /// Write changes back into the record.
    ///
    /// Changes naming unknown or read-only fields are ignored. Returns the
    /// number of fields written.
    pub fn apply(&mut self, changes: &[FieldChange]) -> usize {
        let mut written = 0;
        for change in changes {
            let Some(field) = self
                .fields
                .iter_mut()
                .find(|field| field.name == change.field)
            else {
                continue;
            };
            if field.read_only {
                continue;
            }
            field.value = FieldValue::Text(change.new_value.clone());
            written += 1;
        }
        written
    }

    /// Load a record from a JSON file of the form `{"fields": [...]}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::default()
            .with_field(FieldDescriptor::new("email", "EmailAddress").with_value("a@b.com"))
            .with_field(FieldDescriptor::new("country", "Country").with_value("  "))
            .with_field(FieldDescriptor::new("country2", "Country").with_value(" US "))
            .with_field(
                FieldDescriptor::new("id", DataTypeTag::None)
                    .with_value("42")
                    .read_only(),
            )
    }

    #[test]
    fn country_value_skips_blank_fields() {
        assert_eq!(sample().country_value(), Some("US"));
    }

    #[test]
    fn apply_skips_read_only_and_unknown() {
        let mut record = sample();
        let written = record.apply(&[
            FieldChange {
                field: "email".to_string(),
                old_value: "a@b.com".to_string(),
                new_value: "x@y.com".to_string(),
            },
            FieldChange {
                field: "id".to_string(),
                old_value: "42".to_string(),
                new_value: "43".to_string(),
            },
            FieldChange {
                field: "missing".to_string(),
                old_value: String::new(),
                new_value: "x".to_string(),
            },
        ]);
        assert_eq!(written, 1);
        assert_eq!(record.field("email").unwrap().value, FieldValue::from("x@y.com"));
        assert_eq!(record.field("id").unwrap().value, FieldValue::from("42"));
    }

    #[test]
    fn deserializes_record_json() {
        let json = r#"{"fields": [
            {"name": "email", "type": "EmailAddress", "value": " A@B.COM "},
            {"name": "age", "value": 42},
            {"name": "note", "type": "Comment", "read_only": true, "value": null}
        ]}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.fields()[0].tag, DataTypeTag::EmailAddress);
        assert_eq!(record.fields()[1].value, FieldValue::Other(Value::from(42)));
        assert_eq!(record.fields()[1].tag, DataTypeTag::None);
        assert!(record.fields()[2].read_only);
        assert!(record.fields()[2].value.is_null());
    }

    #[test]
    fn non_text_values_round_trip_unchanged() {
        let json = r#"{"fields": [
            {"name": "first", "type": "FirstName", "value": "  ada "},
            {"name": "age", "value": 42},
            {"name": "id", "value": 12345678901234567890},
            {"name": "delta", "value": -7},
            {"name": "opt_in", "value": true},
            {"name": "meta", "value": {"a": 1, "tags": ["x", 2]}}
        ]}"#;
        let mut record: Record = serde_json::from_str(json).unwrap();
        record.apply(&[FieldChange {
            field: "first".to_string(),
            old_value: "  ada ".to_string(),
            new_value: "Ada".to_string(),
        }]);

        let written: Value = serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();
        let original: Value = serde_json::from_str(json).unwrap();
        for index in 1..6 {
            assert_eq!(
                written["fields"][index]["value"],
                original["fields"][index]["value"]
            );
        }
        assert_eq!(written["fields"][0]["value"], "Ada");

        let text = record.to_json_pretty().unwrap();
        assert!(text.contains("\"value\": 42\n"));
        assert!(text.contains("\"value\": 12345678901234567890\n"));
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let json = r#"{"fields": [
            {"name": "email", "type": "EmailAddress", "value": "a@b.com"},
            {"name": "email", "type": "EmailAddress", "value": "c@d.com"}
        ]}"#;
        let error = serde_json::from_str::<Record>(json).unwrap_err();
        assert!(error.to_string().contains("duplicate field name"));

        let result = Record::new(vec![
            FieldDescriptor::new("tel", "PhoneNumber"),
            FieldDescriptor::new("tel", "PhoneNumber"),
        ]);
        assert!(matches!(result, Err(ModelError::DuplicateField(name)) if name == "tel"));
    }

    #[test]
    fn with_field_replaces_same_name() {
        let record = Record::default()
            .with_field(FieldDescriptor::new("email", "EmailAddress").with_value("a@b.com"))
            .with_field(FieldDescriptor::new("email", "EmailAddress").with_value("c@d.com"));
        assert_eq!(record.len(), 1);
        assert_eq!(record.fields()[0].value, FieldValue::from("c@d.com"));
    }

    #[test]
    fn label_falls_back_to_name() {
        let field = FieldDescriptor::new("tel", "PhoneNumber");
        assert_eq!(field.label(), "tel");
        assert_eq!(field.with_display_name("Telephone").label(), "Telephone");
    }
}
