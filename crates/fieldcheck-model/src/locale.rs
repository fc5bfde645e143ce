//! Minimal locale tags for culture-aware casing.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A `language[-REGION]` tag such as `en-GB` or `tr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn parse(tag: &str) -> Result<Self, ModelError> {
        let invalid = || ModelError::InvalidLocale(tag.to_string());
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().ok_or_else(invalid)?;
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(invalid());
        }
        let region = match parts.next() {
            None => None,
            Some(region)
                if (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
                    || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit())) =>
            {
                Some(region.to_ascii_uppercase())
            }
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Turkic languages distinguish dotted and dotless i.
    pub fn is_turkic(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("GB".to_string()),
        }
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}
