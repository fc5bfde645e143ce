//! Inputs to default-country resolution.

use crate::record::{FieldDescriptor, Record};

/// The candidate sources for a field's default country, highest precedence
/// first. Built fresh for each normalize or validate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryContext {
    /// Value of a `Country` field in the same record.
    pub sibling_value: Option<String>,
    /// Default configured on the field's rule.
    pub attribute_default: Option<String>,
    /// Process-wide configured default.
    pub process_default: Option<String>,
}

impl CountryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather the context for `field` within `record`.
    pub fn for_field(
        record: &Record,
        field: &FieldDescriptor,
        process_default: Option<&str>,
    ) -> Self {
        Self {
            sibling_value: record.country_value().map(str::to_string),
            attribute_default: field.default_country.clone(),
            process_default: process_default.map(str::to_string),
        }
    }

    pub fn with_sibling(mut self, value: impl Into<String>) -> Self {
        self.sibling_value = Some(value.into());
        self
    }

    pub fn with_attribute_default(mut self, value: impl Into<String>) -> Self {
        self.attribute_default = Some(value.into());
        self
    }

    pub fn with_process_default(mut self, value: impl Into<String>) -> Self {
        self.process_default = Some(value.into());
        self
    }
}
