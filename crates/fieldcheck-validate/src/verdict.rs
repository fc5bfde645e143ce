//! Interpretation of verification outcomes under a strictness policy.
//!
//! A failed service call can never prove a value invalid, so it is always
//! accepted. For phone numbers the ambiguous `NoCoverage` and `Unavailable`
//! codes are rejected only when the matching policy flag is set. Email checks
//! reject on `Invalid` alone.

use serde::{Deserialize, Serialize};

use fieldcheck_model::{ResultCode, StrictnessPolicy, ValidationKind, VerificationOutcome};

/// Placeholder replaced by the field's display name in message templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

const EMAIL_MESSAGE: &str = "{name} is not a valid email address";
const PHONE_MESSAGE: &str = "{name} is not a valid telephone number";

/// Accept/reject decision for a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub accept: bool,
    /// Rejection message bound to the field's display name.
    pub message: Option<String>,
}

impl Verdict {
    pub fn accepted() -> Self {
        Self {
            accept: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            accept: false,
            message: Some(message.into()),
        }
    }
}

/// Whether `outcome` is acceptable under `policy`.
pub fn interpret(
    outcome: &VerificationOutcome,
    policy: &StrictnessPolicy,
    kind: ValidationKind,
) -> bool {
    if !outcome.service_call_succeeded {
        return true;
    }
    match kind {
        ValidationKind::Email => outcome.result_code != ResultCode::Invalid,
        ValidationKind::Phone => match outcome.result_code {
            ResultCode::Valid => true,
            ResultCode::NoCoverage => !policy.treat_no_coverage_as_invalid,
            ResultCode::Unavailable => !policy.treat_unavailable_as_invalid,
            ResultCode::Invalid | ResultCode::Unknown => false,
        },
    }
}

/// Interpret `outcome` and bind a rejection message to `display_name`.
///
/// `template` overrides the default message; `{name}` in it is replaced by
/// the display name.
pub fn verdict(
    outcome: &VerificationOutcome,
    policy: &StrictnessPolicy,
    kind: ValidationKind,
    display_name: &str,
    template: Option<&str>,
) -> Verdict {
    if interpret(outcome, policy, kind) {
        return Verdict::accepted();
    }
    Verdict::rejected(rejection_message(kind, display_name, template))
}

pub fn rejection_message(kind: ValidationKind, display_name: &str, template: Option<&str>) -> String {
    let template = template.unwrap_or(match kind {
        ValidationKind::Email => EMAIL_MESSAGE,
        ValidationKind::Phone => PHONE_MESSAGE,
    });
    template.replace(NAME_PLACEHOLDER, display_name)
}
