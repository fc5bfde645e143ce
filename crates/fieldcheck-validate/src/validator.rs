//! Record-level validation.
//!
//! Every writable text field tagged `EmailAddress` or `PhoneNumber` gets one
//! [`ValidationAttempt`]. Transport failures are folded into an accepted,
//! inconclusive verdict so an unreachable service never blocks the user.

use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn};

use fieldcheck_model::{CountryContext, Record, ValidationKind, Verifier};
use fieldcheck_normalize::resolve_country;

use crate::attempt::{ValidationAttempt, ValidationOptions};

/// Result for one validated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldVerdict {
    pub field: String,
    pub kind: ValidationKind,
    pub accept: bool,
    pub message: Option<String>,
    /// The verifier could not be reached; accepted by default.
    pub inconclusive: bool,
}

/// Verdicts for all validated fields of a record, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub results: Vec<FieldVerdict>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|result| result.accept)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FieldVerdict> {
        self.results.iter().filter(|result| !result.accept)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn inconclusive_count(&self) -> usize {
        self.results.iter().filter(|result| result.inconclusive).count()
    }

    pub fn get(&self, field: &str) -> Option<&FieldVerdict> {
        self.results.iter().find(|result| result.field == field)
    }
}

/// Validates records against a verifier.
pub struct RecordValidator<'a, V: Verifier + ?Sized> {
    attempt: ValidationAttempt<'a, V>,
    options: ValidationOptions,
    process_default_country: Option<String>,
}

impl<'a, V: Verifier + ?Sized> RecordValidator<'a, V> {
    pub fn new(verifier: &'a V, options: ValidationOptions) -> Self {
        Self {
            attempt: ValidationAttempt::new(verifier),
            options,
            process_default_country: None,
        }
    }

    pub fn with_process_default_country(mut self, country: Option<String>) -> Self {
        self.process_default_country = country;
        self
    }

    pub fn validate(&self, record: &Record) -> ValidationReport {
        let span = info_span!("validate", fields = record.len());
        let _guard = span.enter();

        let mut report = ValidationReport::default();
        for field in record.fields() {
            if field.read_only {
                continue;
            }
            let Some(kind) = field.tag.validation_kind() else {
                continue;
            };
            if !field.value.is_null() && field.value.as_text().is_none() {
                continue;
            }

            let country = match kind {
                ValidationKind::Phone => Some(resolve_country(&CountryContext::for_field(
                    record,
                    field,
                    self.process_default_country.as_deref(),
                ))),
                ValidationKind::Email => None,
            };
            let result = self.attempt.validate(
                field.value.as_text(),
                country.as_deref(),
                kind,
                field.label(),
                &self.options,
            );

            let entry = match result {
                Ok(verdict) => FieldVerdict {
                    field: field.name.clone(),
                    kind,
                    accept: verdict.accept,
                    message: verdict.message,
                    inconclusive: false,
                },
                Err(error) => {
                    if error.is_transport() {
                        warn!(field = %field.name, %kind, %error, "verifier unreachable, accepting");
                    } else {
                        error!(field = %field.name, %kind, %error, "verifier misconfigured, accepting");
                    }
                    FieldVerdict {
                        field: field.name.clone(),
                        kind,
                        accept: true,
                        message: None,
                        inconclusive: true,
                    }
                }
            };
            report.results.push(entry);
        }

        info!(
            checked = report.results.len(),
            rejected = report.failure_count(),
            inconclusive = report.inconclusive_count(),
            "validation pass complete"
        );
        report
    }
}
