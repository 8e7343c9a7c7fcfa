//! # Filter Compiler
//!
//! Compiles [`SearchCriteria`] into a listing [`Predicate`].
//!
//! Pure and deterministic: no I/O, no state, no failure path. Fields the
//! criteria left unspecified contribute no clause at all, so an empty
//! criteria compiles to the empty predicate. Any result cap is the
//! caller's concern; the compiler has no visibility into collection size.

use super::criteria::SearchCriteria;
use super::predicate::{Clause, Predicate};

/// Document field holding the listing price.
pub const FIELD_PRICE: &str = "price";
/// Document field holding the bedroom count.
pub const FIELD_BEDROOMS: &str = "bedrooms";
/// Document field holding the bathroom count.
pub const FIELD_BATHROOMS: &str = "bathrooms";
/// Document field holding the free-text location.
pub const FIELD_LOCATION: &str = "location";
/// Document field holding the living area in square feet.
pub const FIELD_SIZE: &str = "size_sqft";
/// Document field holding the amenity list.
pub const FIELD_AMENITIES: &str = "amenities";

/// Compile search criteria into a predicate.
pub fn compile(criteria: &SearchCriteria) -> Predicate {
    let mut predicate = Predicate::new();

    if let Some(bedrooms) = criteria.bedrooms {
        predicate = predicate.and(Clause::Gte {
            field: FIELD_BEDROOMS.to_string(),
            value: i64::from(bedrooms),
        });
    }

    if let Some(bathrooms) = criteria.bathrooms {
        predicate = predicate.and(Clause::Gte {
            field: FIELD_BATHROOMS.to_string(),
            value: i64::from(bathrooms),
        });
    }

    if let Some(location) = &criteria.location {
        predicate = predicate.and(Clause::ContainsCi {
            field: FIELD_LOCATION.to_string(),
            needle: location.clone(),
        });
    }

    if let Some(budget) = criteria.budget {
        predicate = predicate.and(budget_clause(budget));
    }

    if criteria.min_size.is_some() || criteria.max_size.is_some() {
        predicate = predicate.and(Clause::Range {
            field: FIELD_SIZE.to_string(),
            min: criteria.min_size.map(|n| n as i64),
            max: criteria.max_size.map(|n| n as i64),
        });
    }

    if !criteria.amenities.is_empty() {
        predicate = predicate.and(Clause::AnyOf {
            field: FIELD_AMENITIES.to_string(),
            values: criteria.amenities.clone(),
        });
    }

    predicate
}

/// Budget matches a listing priced within budget, priced at zero, or with
/// no price at all. Many listings carry no price; a bare `price <= budget`
/// would silently drop every one of them from every budgeted search, so
/// all three arms are load-bearing.
fn budget_clause(budget: u64) -> Clause {
    Clause::Or(vec![
        Clause::Lte {
            field: FIELD_PRICE.to_string(),
            value: budget as i64,
        },
        Clause::Missing {
            field: FIELD_PRICE.to_string(),
        },
        Clause::Eq {
            field: FIELD_PRICE.to_string(),
            value: serde_json::Value::from(0),
        },
    ])
}
