//! Filter criteria: the optional constraints a caller supplies to narrow
//! the record set.

use stockscout_core::{DomainError, DomainResult, ValueObject};

/// Reserved category value meaning "no category constraint".
pub const CATEGORY_ALL: &str = "all";

/// Per-request search constraints. Absent fields impose no constraint.
///
/// Built from raw textual parameters via [`FilterCriteria::from_raw`];
/// discarded when the request completes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    /// Build criteria from raw request parameters.
    ///
    /// Normalization rules:
    /// - blank text (empty or whitespace-only) counts as absent;
    /// - a category of `"all"` (any case) counts as absent;
    /// - price values that do not parse as a finite number count as absent.
    ///   This leniency is deliberate: malformed numeric filters are tolerated
    ///   rather than rejected.
    pub fn from_raw(
        q: Option<&str>,
        category: Option<&str>,
        min_price: Option<&str>,
        max_price: Option<&str>,
    ) -> Self {
        Self {
            name: normalize_text(q),
            category: normalize_text(category)
                .filter(|c| !c.eq_ignore_ascii_case(CATEGORY_ALL)),
            min_price: min_price.and_then(parse_price),
            max_price: max_price.and_then(parse_price),
        }
    }

    /// Check the bound relationship: when both bounds are present, the
    /// minimum must not exceed the maximum. Violation is a validation
    /// error, never a silent filter.
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price)
            && min > max
        {
            return Err(DomainError::validation(format!(
                "minimum price ({min}) exceeds maximum price ({max})"
            )));
        }
        Ok(())
    }
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}
