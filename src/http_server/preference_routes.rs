//! Preference HTTP Routes
//!
//! Per-user preference records: fetch, upsert, and favorite management.
//! Saving a favorite verifies the listing actually exists.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::listings::ListingStore;
use crate::preferences::{PreferenceStore, SavePreferences, UserPreference};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;

/// Preference state shared across handlers
pub struct PreferenceState {
    pub preferences: Arc<PreferenceStore>,
    pub listings: Arc<dyn ListingStore>,
}

/// Create preference routes
pub fn preference_routes(state: Arc<PreferenceState>) -> Router {
    Router::new()
        .route("/", post(save_preferences_handler))
        .route("/{user_id}", get(get_preferences_handler))
        .route("/{user_id}/save", post(save_property_handler))
        .route(
            "/{user_id}/save/{property_id}",
            delete(remove_property_handler),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavePropertyRequest {
    #[serde(default)]
    property_id: String,
}

/// Get a user's preferences
async fn get_preferences_handler(
    State(state): State<Arc<PreferenceState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Option<UserPreference>>>> {
    let record = state.preferences.get(&user_id)?;

    let response = match record {
        Some(record) => ApiResponse::ok(Some(record)),
        None => ApiResponse::with_message(None, "No preferences found"),
    };
    Ok(Json(response))
}

/// Create or update a user's preferences
async fn save_preferences_handler(
    State(state): State<Arc<PreferenceState>>,
    Json(payload): Json<SavePreferences>,
) -> ApiResult<Json<ApiResponse<UserPreference>>> {
    if payload.user_id.trim().is_empty() {
        return Err(ApiError::MissingField("userId"));
    }

    let record = state.preferences.save(payload)?;
    Ok(Json(ApiResponse::with_message(
        record,
        "Preferences saved successfully",
    )))
}

/// Add a listing to a user's favorites
async fn save_property_handler(
    State(state): State<Arc<PreferenceState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<SavePropertyRequest>,
) -> ApiResult<Json<ApiResponse<UserPreference>>> {
    if payload.property_id.trim().is_empty() {
        return Err(ApiError::MissingField("propertyId"));
    }

    // The favorite must point at a real listing.
    if state.listings.find_by_id(&payload.property_id)?.is_none() {
        return Err(ApiError::NotFound("Property not found"));
    }

    let record = state
        .preferences
        .save_property(&user_id, &payload.property_id)?;
    Ok(Json(ApiResponse::with_message(
        record,
        "Property saved to favorites",
    )))
}

/// Remove a listing from a user's favorites
async fn remove_property_handler(
    State(state): State<Arc<PreferenceState>>,
    Path((user_id, property_id)): Path<(String, String)>,
) -> ApiResult<Json<ApiResponse<Option<UserPreference>>>> {
    let record = state.preferences.remove_property(&user_id, &property_id)?;
    Ok(Json(ApiResponse::with_message(
        record,
        "Property removed from favorites",
    )))
}
