//! # Preference Store
//!
//! RwLock-guarded in-memory store for user preference records.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use super::errors::{PreferenceError, PreferenceResult};
use super::types::{SavePreferences, UserPreference};

/// In-memory preference store keyed by user id.
#[derive(Default)]
pub struct PreferenceStore {
    entries: RwLock<HashMap<String, UserPreference>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a user's record, `None` when the user has none yet.
    pub fn get(&self, user_id: &str) -> PreferenceResult<Option<UserPreference>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| PreferenceError::LockPoisoned)?;
        Ok(entries.get(user_id).cloned())
    }

    /// Create or update a record.
    ///
    /// A provided saved-property list replaces the stored one, provided
    /// preference values merge into the stored map, and a provided search
    /// history entry is appended.
    pub fn save(&self, payload: SavePreferences) -> PreferenceResult<UserPreference> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PreferenceError::LockPoisoned)?;

        let record = entries
            .entry(payload.user_id.clone())
            .or_insert_with(|| UserPreference::new(&payload.user_id));

        if let Some(saved) = payload.saved_properties {
            record.saved_properties = saved;
        }
        if let Some(preferences) = payload.preferences {
            for (key, value) in preferences {
                record.preferences.insert(key, value);
            }
        }
        if let Some(entry) = payload.search_history {
            record.search_history.push(entry);
        }
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    /// Add a listing to a user's favorites, creating the record if needed.
    /// Adding an already-saved listing is a no-op.
    pub fn save_property(
        &self,
        user_id: &str,
        property_id: &str,
    ) -> PreferenceResult<UserPreference> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PreferenceError::LockPoisoned)?;

        let record = entries
            .entry(user_id.to_string())
            .or_insert_with(|| UserPreference::new(user_id));

        if !record.saved_properties.iter().any(|id| id == property_id) {
            record.saved_properties.push(property_id.to_string());
            record.updated_at = Utc::now();
        }

        Ok(record.clone())
    }

    /// Remove a listing from a user's favorites. Returns the updated
    /// record, or `None` when the user has no record at all.
    pub fn remove_property(
        &self,
        user_id: &str,
        property_id: &str,
    ) -> PreferenceResult<Option<UserPreference>> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| PreferenceError::LockPoisoned)?;

        let Some(record) = entries.get_mut(user_id) else {
            return Ok(None);
        };

        record.saved_properties.retain(|id| id != property_id);
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }
}
