//! # Search Criteria
//!
//! Typed view of the filter parameters a property search may carry.
//!
//! Every field is optional. A value that is absent, empty, non-numeric
//! where a number is expected, or not strictly positive parses to `None`
//! and produces no query clause downstream. This makes
//! `?bedrooms=abc` indistinguishable from omitting `bedrooms` entirely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Location value that means "no location filter".
pub const LOCATION_ANY: &str = "any";

/// Optional, independently-specifiable filter fields for a listing search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Maximum price the user is willing to pay, in currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,

    /// Free-text location fragment, matched case-insensitively.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Minimum number of bedrooms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,

    /// Minimum number of bathrooms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,

    /// Lower bound on living area, square feet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,

    /// Upper bound on living area, square feet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,

    /// Required amenities; a listing matches if it has at least one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl SearchCriteria {
    /// Build criteria from raw query-string parameters.
    ///
    /// Unknown keys are ignored. Never fails: every malformed value
    /// degrades to "not specified".
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            budget: parse_positive_u64(params.get("budget")),
            location: parse_location(params.get("location")),
            bedrooms: parse_positive_u32(params.get("bedrooms")),
            bathrooms: parse_positive_u32(params.get("bathrooms")),
            min_size: parse_positive_u64(params.get("minSize")),
            max_size: parse_positive_u64(params.get("maxSize")),
            amenities: parse_amenities(params.get("amenities")),
        }
    }

    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.budget.is_none()
            && self.location.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.min_size.is_none()
            && self.max_size.is_none()
            && self.amenities.is_empty()
    }
}

/// Parse a strictly positive integer, degrading anything else to `None`.
fn parse_positive_i64(value: Option<&String>) -> Option<i64> {
    let n: i64 = value?.trim().parse().ok()?;
    if n > 0 {
        Some(n)
    } else {
        None
    }
}

fn parse_positive_u64(value: Option<&String>) -> Option<u64> {
    parse_positive_i64(value).map(|n| n as u64)
}

fn parse_positive_u32(value: Option<&String>) -> Option<u32> {
    parse_positive_i64(value).and_then(|n| u32::try_from(n).ok())
}

/// A location is usable when non-empty and not the `"any"` sentinel.
fn parse_location(value: Option<&String>) -> Option<String> {
    let location = value?.trim();
    if location.is_empty() || location == LOCATION_ANY {
        return None;
    }
    Some(location.to_string())
}

/// Split a comma-separated amenity list, trimming and dropping empty tokens.
fn parse_amenities(value: Option<&String>) -> Vec<String> {
    match value {
        Some(raw) => raw
            .split(',')
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .collect(),
        None => Vec::new(),
    }
}
