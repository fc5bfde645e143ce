//! Data model for metadata-driven form field normalization and validation.

pub mod country;
pub mod credentials;
pub mod error;
pub mod locale;
pub mod record;
pub mod service;
pub mod tag;
pub mod verification;

pub use country::CountryContext;
pub use credentials::ServiceCredentials;
pub use error::{ModelError, Result};
pub use locale::Locale;
pub use record::{FieldChange, FieldDescriptor, FieldValue, Record};
pub use service::{PhoneFormatter, ServiceError, ServiceResult, Verifier};
pub use tag::{DataTypeTag, ValidationKind};
pub use verification::{
    DEFAULT_APPLICATION_TAG, PhoneFormatRequest, PhoneFormatResponse, ResultCode, ServiceStatus,
    StrictnessPolicy, VerificationOutcome, VerificationRequest,
};
