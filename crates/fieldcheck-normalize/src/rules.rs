//! Mapping from data-type tags to normalization actions.

use serde::{Deserialize, Serialize};

use fieldcheck_model::DataTypeTag;

/// Normalization applied to a field's trimmed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Strip surrounding whitespace only.
    Trim,
    LowercaseEmail,
    /// Reformat through the verification service.
    FormatPhone,
    ProperCaseFirstName,
    ProperCaseLastName,
}

impl Action {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Trim => "Trim",
            Self::LowercaseEmail => "Lowercase email",
            Self::FormatPhone => "Format phone",
            Self::ProperCaseFirstName => "Proper-case first name",
            Self::ProperCaseLastName => "Proper-case surname",
        }
    }
}

/// The action for `tag`. Tags without a dedicated rule are trimmed.
pub fn rule_for(tag: &DataTypeTag) -> Action {
    match tag {
        DataTypeTag::EmailAddress => Action::LowercaseEmail,
        DataTypeTag::PhoneNumber => Action::FormatPhone,
        DataTypeTag::FirstName => Action::ProperCaseFirstName,
        DataTypeTag::LastName => Action::ProperCaseLastName,
        DataTypeTag::Country | DataTypeTag::Unrecognized(_) | DataTypeTag::None => Action::Trim,
    }
}

/// Parse a raw tag and return its action.
pub fn rule_for_tag(raw: &str) -> Action {
    rule_for(&DataTypeTag::parse(raw))
}
