//! Record-level normalization pass.
//!
//! [`Normalizer`] walks every writable text field of a [`Record`], looks up
//! the field's [`Action`] from its data-type tag and reports the fields whose
//! value changed. Phone formatting goes through a [`PhoneFormatter`]; any
//! failure there leaves the trimmed value in place and the pass continues.

use tracing::{debug, info, info_span, warn};

use fieldcheck_model::{
    CountryContext, DEFAULT_APPLICATION_TAG, FieldChange, FieldDescriptor, Locale,
    PhoneFormatRequest, PhoneFormatter, Record,
};

use crate::casing::to_proper_case;
use crate::country;
use crate::rules::{Action, rule_for};

/// Per-call normalization settings.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Locale used for name casing.
    pub locale: Locale,
    /// Process-wide default country for phone numbers.
    pub process_default_country: Option<String>,
    /// Identifies this application to the formatting service.
    pub application_tag: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            process_default_country: None,
            application_tag: DEFAULT_APPLICATION_TAG.to_string(),
        }
    }
}

impl NormalizeOptions {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_process_default_country(mut self, country: Option<String>) -> Self {
        self.process_default_country = country;
        self
    }

    pub fn with_application_tag(mut self, tag: impl Into<String>) -> Self {
        self.application_tag = tag.into();
        self
    }
}

/// Normalizes records using a phone formatting collaborator.
pub struct Normalizer<'a, F: PhoneFormatter + ?Sized> {
    formatter: &'a F,
    options: NormalizeOptions,
}

impl<'a, F: PhoneFormatter + ?Sized> Normalizer<'a, F> {
    pub fn new(formatter: &'a F, options: NormalizeOptions) -> Self {
        Self { formatter, options }
    }

    /// Compute the changes normalization would make to `record`.
    ///
    /// Read-only, non-text, null and empty fields are skipped. A change is
    /// reported only when the normalized value differs from the original.
    pub fn normalize(&self, record: &Record) -> Vec<FieldChange> {
        let span = info_span!("normalize", fields = record.len());
        let _guard = span.enter();

        let mut changes = Vec::new();
        for field in record.fields() {
            let Some(original) = field.writable_text() else {
                continue;
            };
            let action = rule_for(&field.tag);
            debug!(field = %field.name, action = action.display_name(), "normalizing field");
            let normalized = self.apply(action, record, field, original.trim());
            if normalized != original {
                changes.push(FieldChange {
                    field: field.name.clone(),
                    old_value: original.to_string(),
                    new_value: normalized,
                });
            }
        }

        info!(changed = changes.len(), "normalization pass complete");
        changes
    }

    /// Normalize `record` and write the changes back into it.
    pub fn normalize_in_place(&self, record: &mut Record) -> Vec<FieldChange> {
        let changes = self.normalize(record);
        record.apply(&changes);
        changes
    }

    fn apply(
        &self,
        action: Action,
        record: &Record,
        field: &FieldDescriptor,
        trimmed: &str,
    ) -> String {
        if trimmed.is_empty() {
            return String::new();
        }
        match action {
            Action::Trim => trimmed.to_string(),
            Action::LowercaseEmail => trimmed.to_lowercase(),
            Action::ProperCaseFirstName => to_proper_case(trimmed, false, &self.options.locale),
            Action::ProperCaseLastName => to_proper_case(trimmed, true, &self.options.locale),
            Action::FormatPhone => self.format_phone(record, field, trimmed),
        }
    }

    fn format_phone(&self, record: &Record, field: &FieldDescriptor, trimmed: &str) -> String {
        let context = CountryContext::for_field(
            record,
            field,
            self.options.process_default_country.as_deref(),
        );
        let request = PhoneFormatRequest {
            number: trimmed.to_string(),
            default_country: country::resolve(&context),
            application: self.options.application_tag.clone(),
        };

        match self.formatter.format_phone_number(&request) {
            Ok(response) if response.status.success && !response.formatted_number.is_empty() => {
                response.formatted_number
            }
            Ok(response) => {
                warn!(
                    field = %field.name,
                    error = response.status.error_message.as_deref().unwrap_or("none"),
                    "phone formatting unsuccessful, keeping trimmed value"
                );
                trimmed.to_string()
            }
            Err(error) => {
                warn!(field = %field.name, %error, "phone formatting failed, keeping trimmed value");
                trimmed.to_string()
            }
        }
    }
}
