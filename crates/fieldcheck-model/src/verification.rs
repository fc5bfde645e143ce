//! Request and outcome types exchanged with the verification service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tag::ValidationKind;

/// Flag name the service reads for the no-coverage policy.
pub const FLAG_NO_COVERAGE_INVALID: &str = "TreatNoCoverageAsInvalid";
/// Flag name the service reads for the unavailable-mobile policy.
pub const FLAG_UNAVAILABLE_INVALID: &str = "TreatUnavailableMobileAsInvalid";

/// Raw verdict reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    Valid,
    Invalid,
    /// The number's network has no coverage data.
    NoCoverage,
    /// The mobile number is currently unreachable.
    Unavailable,
    #[serde(other)]
    Unknown,
}

/// Which ambiguous verdicts count as invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrictnessPolicy {
    #[serde(default)]
    pub treat_no_coverage_as_invalid: bool,
    #[serde(default)]
    pub treat_unavailable_as_invalid: bool,
    /// Further named options passed through to the service untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_flags: BTreeMap<String, bool>,
}

impl StrictnessPolicy {
    /// Policy that rejects every ambiguous verdict.
    pub fn strict() -> Self {
        Self {
            treat_no_coverage_as_invalid: true,
            treat_unavailable_as_invalid: true,
            extra_flags: BTreeMap::new(),
        }
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.extra_flags.insert(name.into(), value);
        self
    }

    /// Full set of named options sent to the service.
    pub fn flags(&self) -> BTreeMap<String, bool> {
        let mut flags = self.extra_flags.clone();
        flags.insert(
            FLAG_NO_COVERAGE_INVALID.to_string(),
            self.treat_no_coverage_as_invalid,
        );
        flags.insert(
            FLAG_UNAVAILABLE_INVALID.to_string(),
            self.treat_unavailable_as_invalid,
        );
        flags
    }
}

/// A single email or phone verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationRequest {
    pub subject: String,
    pub kind: ValidationKind,
    /// Only set for phone checks.
    pub country: Option<String>,
    pub flags: BTreeMap<String, bool>,
}

impl VerificationRequest {
    pub fn email(subject: impl Into<String>, policy: &StrictnessPolicy) -> Self {
        Self {
            subject: subject.into(),
            kind: ValidationKind::Email,
            country: None,
            flags: policy.flags(),
        }
    }

    pub fn phone(
        subject: impl Into<String>,
        country: impl Into<String>,
        policy: &StrictnessPolicy,
    ) -> Self {
        Self {
            subject: subject.into(),
            kind: ValidationKind::Phone,
            country: Some(country.into()),
            flags: policy.flags(),
        }
    }
}

/// Status block the service attaches to every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub success: bool,
    pub error_message: Option<String>,
    pub credits_remaining: Option<i64>,
}

impl ServiceStatus {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
            credits_remaining: None,
        }
    }
}

/// What the service said about a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub service_call_succeeded: bool,
    pub result_code: ResultCode,
    pub error_message: Option<String>,
}

impl VerificationOutcome {
    pub fn succeeded(result_code: ResultCode) -> Self {
        Self {
            service_call_succeeded: true,
            result_code,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            service_call_succeeded: false,
            result_code: ResultCode::Unknown,
            error_message: Some(message.into()),
        }
    }

    pub fn from_status(status: ServiceStatus, result_code: ResultCode) -> Self {
        Self {
            service_call_succeeded: status.success,
            result_code,
            error_message: status.error_message,
        }
    }
}

/// Application tag sent with phone formatting requests unless configured.
pub const DEFAULT_APPLICATION_TAG: &str = "fieldcheck";

/// Request to reformat a telephone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormatRequest {
    pub number: String,
    pub default_country: String,
    /// Identifies the calling application to the service.
    pub application: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormatResponse {
    pub formatted_number: String,
    pub status: ServiceStatus,
}
