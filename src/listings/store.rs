//! # Listing Store
//!
//! In-memory document store for property listings.
//!
//! Documents are `serde_json` objects with no fixed schema. Result order
//! is unspecified; callers apply their own result cap via `limit`.

use std::path::Path;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use crate::query::Predicate;

use super::errors::{StoreError, StoreResult};

/// Store seam for listing retrieval.
pub trait ListingStore: Send + Sync {
    /// Return at most `limit` documents matching the predicate.
    fn find(&self, predicate: &Predicate, limit: usize) -> StoreResult<Vec<Value>>;

    /// Look up a single listing by its `id` field.
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Value>>;

    /// Insert a document, assigning an `id` when absent. Returns the
    /// stored document.
    fn insert(&self, doc: Value) -> StoreResult<Value>;

    /// Number of stored listings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// RwLock-guarded in-memory listing store, seedable from a JSON file.
#[derive(Default)]
pub struct MemoryListingStore {
    docs: RwLock<Vec<Value>>,
}

impl MemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file containing an array of listing objects.
    pub fn from_seed_file(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let docs: Value = serde_json::from_str(&content)?;

        let Value::Array(docs) = docs else {
            return Err(StoreError::InvalidSeed(
                "seed file must contain a JSON array".to_string(),
            ));
        };

        if let Some(bad) = docs.iter().find(|doc| !doc.is_object()) {
            return Err(StoreError::InvalidSeed(format!(
                "seed entries must be objects, found: {}",
                bad
            )));
        }

        let store = Self::new();
        for doc in docs {
            store.insert(doc)?;
        }
        Ok(store)
    }

    /// Compare a document's `id` field against a path-style string id.
    /// Seed data uses numeric ids, inserted documents use UUID strings;
    /// both must be addressable.
    fn id_matches(doc: &Value, id: &str) -> bool {
        match doc.get("id") {
            Some(Value::String(s)) => s == id,
            Some(Value::Number(n)) => n.to_string() == id,
            _ => false,
        }
    }
}

impl ListingStore for MemoryListingStore {
    fn find(&self, predicate: &Predicate, limit: usize) -> StoreResult<Vec<Value>> {
        let docs = self.docs.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(docs
            .iter()
            .filter(|doc| predicate.matches(doc))
            .take(limit)
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Value>> {
        let docs = self.docs.read().map_err(|_| StoreError::LockPoisoned)?;

        Ok(docs.iter().find(|doc| Self::id_matches(doc, id)).cloned())
    }

    fn insert(&self, mut doc: Value) -> StoreResult<Value> {
        if doc.get("id").is_none() {
            if let Some(obj) = doc.as_object_mut() {
                obj.insert(
                    "id".to_string(),
                    Value::String(Uuid::new_v4().to_string()),
                );
            }
        }

        let mut docs = self.docs.write().map_err(|_| StoreError::LockPoisoned)?;
        docs.push(doc.clone());
        Ok(doc)
    }

    fn len(&self) -> usize {
        self.docs.read().map(|docs| docs.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{compile, SearchCriteria};
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Write;

    fn seeded_store() -> MemoryListingStore {
        let store = MemoryListingStore::new();
        store
            .insert(json!({
                "id": 1,
                "location": "Austin, TX",
                "price": 250000,
                "bedrooms": 3,
                "bathrooms": 2,
                "size_sqft": 1400,
                "amenities": ["pool", "garage"],
            }))
            .unwrap();
        store
            .insert(json!({
                "id": 2,
                "location": "Dallas, TX",
                "bedrooms": 2,
                "bathrooms": 1,
                "size_sqft": 900,
                "amenities": ["gym"],
            }))
            .unwrap();
        store
    }

    fn predicate_for(pairs: &[(&str, &str)]) -> Predicate {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        compile(&SearchCriteria::from_params(&params))
    }

    #[test]
    fn test_find_applies_predicate_and_limit() {
        let store = seeded_store();

        let all = store.find(&Predicate::new(), 50).unwrap();
        assert_eq!(all.len(), 2);

        let capped = store.find(&Predicate::new(), 1).unwrap();
        assert_eq!(capped.len(), 1);

        let austin = store
            .find(&predicate_for(&[("location", "austin")]), 50)
            .unwrap();
        assert_eq!(austin.len(), 1);
        assert_eq!(austin[0]["id"], 1);
    }

    #[test]
    fn test_budget_search_keeps_unpriced_listing() {
        let store = seeded_store();

        let found = store
            .find(&predicate_for(&[("budget", "300000")]), 50)
            .unwrap();
        // Listing 2 has no price and must survive a budgeted search.
        assert_eq!(found.len(), 2);

        let found = store
            .find(&predicate_for(&[("budget", "200000")]), 50)
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["id"], 2);
    }

    #[test]
    fn test_find_by_id_accepts_numeric_and_string_ids() {
        let store = seeded_store();
        assert!(store.find_by_id("1").unwrap().is_some());
        assert!(store.find_by_id("99").unwrap().is_none());

        let inserted = store.insert(json!({"location": "Waco, TX"})).unwrap();
        let id = inserted["id"].as_str().unwrap();
        assert!(store.find_by_id(id).unwrap().is_some());
    }

    #[test]
    fn test_insert_assigns_id_when_absent() {
        let store = MemoryListingStore::new();
        let doc = store.insert(json!({"location": "Austin"})).unwrap();
        assert!(doc["id"].is_string());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_seed_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "location": "Austin"}}, {{"id": 2, "location": "Dallas"}}]"#
        )
        .unwrap();

        let store = MemoryListingStore::from_seed_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.find_by_id("2").unwrap().is_some());
    }

    #[test]
    fn test_seed_file_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1}}"#).unwrap();

        let result = MemoryListingStore::from_seed_file(file.path());
        assert!(matches!(result, Err(StoreError::InvalidSeed(_))));
    }
}
