//! Validation of email and telephone fields against an external verifier.
//!
//! - **verdict**: result-code interpretation under a strictness policy
//! - **attempt**: one verifier round-trip for one value
//! - **validator**: record-level pass producing a [`ValidationReport`]

pub mod attempt;
pub mod validator;
pub mod verdict;

pub use attempt::{ValidationAttempt, ValidationOptions};
pub use validator::{FieldVerdict, RecordValidator, ValidationReport};
pub use verdict::{Verdict, interpret, rejection_message, verdict};
