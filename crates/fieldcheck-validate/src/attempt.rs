//! A single field's validation round-trip.

use tracing::debug;

use fieldcheck_model::{
    ServiceResult, StrictnessPolicy, ValidationKind, VerificationRequest, Verifier,
};
use fieldcheck_normalize::FALLBACK_COUNTRY;

use crate::verdict::{Verdict, verdict};

/// Per-call validation settings.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    pub policy: StrictnessPolicy,
    /// Overrides the default rejection message. `{name}` is replaced by the
    /// field's display name.
    pub message_template: Option<String>,
}

impl ValidationOptions {
    pub fn with_policy(mut self, policy: StrictnessPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_message_template(mut self, template: impl Into<String>) -> Self {
        self.message_template = Some(template.into());
        self
    }
}

/// Validates one value with exactly one verifier call.
pub struct ValidationAttempt<'a, V: Verifier + ?Sized> {
    verifier: &'a V,
}

impl<'a, V: Verifier + ?Sized> ValidationAttempt<'a, V> {
    pub fn new(verifier: &'a V) -> Self {
        Self { verifier }
    }

    /// Validate `subject` as `kind`.
    ///
    /// A missing or empty subject is accepted without calling the verifier.
    /// `country` is only sent for phone checks and defaults to
    /// [`FALLBACK_COUNTRY`]. Transport errors are returned to the caller.
    pub fn validate(
        &self,
        subject: Option<&str>,
        country: Option<&str>,
        kind: ValidationKind,
        display_name: &str,
        options: &ValidationOptions,
    ) -> ServiceResult<Verdict> {
        let Some(subject) = subject.filter(|subject| !subject.is_empty()) else {
            return Ok(Verdict::accepted());
        };

        let request = match kind {
            ValidationKind::Email => VerificationRequest::email(subject, &options.policy),
            ValidationKind::Phone => VerificationRequest::phone(
                subject,
                country.unwrap_or(FALLBACK_COUNTRY),
                &options.policy,
            ),
        };
        let outcome = self.verifier.verify(&request)?;
        debug!(
            field = display_name,
            %kind,
            succeeded = outcome.service_call_succeeded,
            code = ?outcome.result_code,
            "verification outcome"
        );

        Ok(verdict(
            &outcome,
            &options.policy,
            kind,
            display_name,
            options.message_template.as_deref(),
        ))
    }
}
