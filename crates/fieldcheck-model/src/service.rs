//! Collaborator traits for the external verification service.
//!
//! The normalization and validation crates depend only on these traits; the
//! HTTP implementation lives in `fieldcheck-service`.

use thiserror::Error;

use crate::verification::{
    PhoneFormatRequest, PhoneFormatResponse, VerificationOutcome, VerificationRequest,
};

/// Failure talking to the verification service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("service returned HTTP {status}")]
    Http { status: u16 },

    /// The response body could not be decoded.
    #[error("could not decode service response: {0}")]
    Decode(String),

    /// The client could not be built from configuration.
    #[error("service configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Transport failures are inconclusive rather than invalid.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Http { .. } | Self::Decode(_)
        )
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Reformats telephone numbers.
pub trait PhoneFormatter: Send + Sync {
    fn format_phone_number(&self, request: &PhoneFormatRequest)
    -> ServiceResult<PhoneFormatResponse>;
}

/// Checks email addresses and telephone numbers.
pub trait Verifier: Send + Sync {
    fn verify(&self, request: &VerificationRequest) -> ServiceResult<VerificationOutcome>;
}
