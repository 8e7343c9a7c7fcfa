//! # Preference Types
//!
//! Stored preference records and the upsert payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything the system remembers about one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub user_id: String,

    /// Ids of listings the user marked as favorites.
    pub saved_properties: Vec<String>,

    /// Free-form preference values keyed by name.
    pub preferences: Map<String, Value>,

    /// Past searches, newest last. Entries are stored as submitted.
    pub search_history: Vec<Value>,

    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            saved_properties: Vec::new(),
            preferences: Map::new(),
            search_history: Vec::new(),
            updated_at: Utc::now(),
        }
    }
}

/// Upsert payload for [`crate::preferences::PreferenceStore::save`].
///
/// Absent fields leave the stored record untouched: `saved_properties`
/// replaces the list, `preferences` merges key by key, and
/// `search_history` appends one entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavePreferences {
    pub user_id: String,

    #[serde(default)]
    pub saved_properties: Option<Vec<String>>,

    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,

    #[serde(default)]
    pub search_history: Option<Value>,
}
