//! Property HTTP Routes
//!
//! Listing search and retrieval. The search handler is the caller side of
//! the filter compiler: it validates the raw parameters, compiles them
//! into a predicate, and applies the configured result cap when querying
//! the store.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::debug;

use crate::listings::ListingStore;
use crate::query::{compile, SearchCriteria};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

/// Query parameters that must look numeric when present.
const NUMERIC_PARAMS: [&str; 5] = ["budget", "bedrooms", "bathrooms", "minSize", "maxSize"];

/// Property state shared across handlers
pub struct PropertyState {
    pub store: Arc<dyn ListingStore>,

    /// Hard cap on search result size, applied here because the compiler
    /// has no visibility into collection size.
    pub result_cap: usize,
}

/// Create property routes
pub fn property_routes(state: Arc<PropertyState>) -> Router {
    Router::new()
        .route("/", get(search_properties_handler))
        .route("/{id}", get(get_property_handler))
        .with_state(state)
}

/// Reject requests whose numeric-looking parameters do not parse. The
/// compiler itself would degrade them to "absent"; surfacing a 400 here
/// keeps a typo from silently widening a search.
fn validate_numeric_params(params: &HashMap<String, String>) -> ApiResult<()> {
    for key in NUMERIC_PARAMS {
        if let Some(value) = params.get(key) {
            if !value.trim().is_empty() && value.trim().parse::<i64>().is_err() {
                return Err(ApiError::InvalidParam(format!(
                    "{} must be a valid number",
                    key
                )));
            }
        }
    }
    Ok(())
}

/// Search listings with optional filters
async fn search_properties_handler(
    State(state): State<Arc<PropertyState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    validate_numeric_params(&params)?;

    let criteria = SearchCriteria::from_params(&params);
    let predicate = compile(&criteria);
    debug!(clauses = predicate.clauses.len(), "compiled search predicate");

    let listings = state.store.find(&predicate, state.result_cap)?;
    let message = format!("Found {} properties", listings.len());

    Ok(Json(ApiResponse::with_message(listings, message)))
}

/// Get a single listing by id
async fn get_property_handler(
    State(state): State<Arc<PropertyState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let listing = state
        .store
        .find_by_id(&id)?
        .ok_or(ApiError::NotFound("Property not found"))?;

    Ok(Json(ApiResponse::ok(listing)))
}
