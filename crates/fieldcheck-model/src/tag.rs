//! Semantic data-type tags carried by record fields.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Semantic kind declared on a field.
///
/// Parsing is exact: `"emailaddress"` is not `EmailAddress`. Anything outside
/// the vocabulary is kept verbatim as [`DataTypeTag::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataTypeTag {
    EmailAddress,
    PhoneNumber,
    Country,
    FirstName,
    LastName,
    /// A tag outside the known vocabulary.
    Unrecognized(String),
    /// No tag declared.
    #[default]
    None,
}

impl DataTypeTag {
    /// Every tag in the known vocabulary, in declaration order.
    pub const VOCABULARY: [DataTypeTag; 5] = [
        DataTypeTag::EmailAddress,
        DataTypeTag::PhoneNumber,
        DataTypeTag::Country,
        DataTypeTag::FirstName,
        DataTypeTag::LastName,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Self::None,
            "EmailAddress" => Self::EmailAddress,
            "PhoneNumber" => Self::PhoneNumber,
            "Country" => Self::Country,
            "FirstName" => Self::FirstName,
            "LastName" => Self::LastName,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::EmailAddress => "EmailAddress",
            Self::PhoneNumber => "PhoneNumber",
            Self::Country => "Country",
            Self::FirstName => "FirstName",
            Self::LastName => "LastName",
            Self::Unrecognized(raw) => raw,
            Self::None => "",
        }
    }

    /// The kind of external validation this tag calls for, if any.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            Self::EmailAddress => Some(ValidationKind::Email),
            Self::PhoneNumber => Some(ValidationKind::Phone),
            _ => None,
        }
    }
}

impl fmt::Display for DataTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DataTypeTag {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for DataTypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataTypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map_or(Self::None, |raw| Self::parse(&raw)))
    }
}

/// What the external verifier is asked to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationKind {
    Email,
    Phone,
}

impl ValidationKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
