//! Metadata-driven normalization of form fields.
//!
//! - **casing**: locale-aware proper-casing of first names and surnames
//! - **country**: default-country precedence for telephone numbers
//! - **rules**: data-type tag to normalization action table
//! - **dispatcher**: the record-level normalization pass

pub mod casing;
pub mod country;
pub mod dispatcher;
pub mod rules;

pub use casing::to_proper_case;
pub use country::{FALLBACK_COUNTRY, resolve as resolve_country};
pub use dispatcher::{NormalizeOptions, Normalizer};
pub use rules::{Action, rule_for, rule_for_tag};
