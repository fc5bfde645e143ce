//! Default-country resolution for telephone numbers.

use fieldcheck_model::CountryContext;

/// Country used when nothing else is configured.
pub const FALLBACK_COUNTRY: &str = "GB";

/// Resolve the default country: sibling `Country` field, then the field's own
/// default, then the process default, then [`FALLBACK_COUNTRY`].
///
/// The value is passed through verbatim apart from trimming; ISO codes,
/// country names and dialling codes are all accepted.
pub fn resolve(context: &CountryContext) -> String {
    [
        context.sibling_value.as_deref(),
        context.attribute_default.as_deref(),
        context.process_default.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|value| !value.is_empty())
    .unwrap_or(FALLBACK_COUNTRY)
    .to_string()
}
