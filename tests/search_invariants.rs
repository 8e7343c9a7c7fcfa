//! End-to-end invariants of the filter pipeline: raw parameters through
//! the compiler and the listing store, result cap applied by the caller.

use std::collections::HashMap;

use serde_json::json;

use homequest::listings::{ListingStore, MemoryListingStore};
use homequest::query::{compile, SearchCriteria};

const RESULT_CAP: usize = 50;

fn criteria(pairs: &[(&str, &str)]) -> SearchCriteria {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SearchCriteria::from_params(&params)
}

/// A store with a spread of listings, including unpriced and zero-priced
/// ones, which the budget policy must keep reachable.
fn seeded_store() -> MemoryListingStore {
    let store = MemoryListingStore::new();
    let docs = vec![
        json!({
            "id": 1, "location": "Austin, TX", "price": 250000,
            "bedrooms": 3, "bathrooms": 2, "size_sqft": 1400,
            "amenities": ["pool", "garage"],
        }),
        json!({
            "id": 2, "location": "North Austin", "price": 0,
            "bedrooms": 2, "bathrooms": 1, "size_sqft": 900,
            "amenities": ["gym"],
        }),
        json!({
            // No price at all.
            "id": 3, "location": "Dallas, TX",
            "bedrooms": 4, "bathrooms": 3, "size_sqft": 2200,
            "amenities": ["garden"],
        }),
        json!({
            "id": 4, "location": "Houston, TX", "price": 750000,
            "bedrooms": 5, "bathrooms": 4, "size_sqft": 3600,
            "amenities": ["pool", "gym", "garage"],
        }),
    ];
    for doc in docs {
        store.insert(doc).unwrap();
    }
    store
}

fn search(store: &MemoryListingStore, pairs: &[(&str, &str)]) -> Vec<serde_json::Value> {
    store
        .find(&compile(&criteria(pairs)), RESULT_CAP)
        .unwrap()
}

fn ids(docs: &[serde_json::Value]) -> Vec<i64> {
    let mut ids: Vec<i64> = docs.iter().filter_map(|d| d["id"].as_i64()).collect();
    ids.sort_unstable();
    ids
}

#[test]
fn all_absent_or_invalid_criteria_match_everything() {
    let store = seeded_store();

    assert_eq!(search(&store, &[]).len(), 4);
    assert_eq!(
        search(&store, &[("budget", "abc"), ("bedrooms", "-1"), ("location", "any")]).len(),
        4
    );
}

#[test]
fn caller_applies_the_result_cap() {
    let store = MemoryListingStore::new();
    for i in 0..120 {
        store
            .insert(json!({"id": i, "location": "Austin"}))
            .unwrap();
    }

    let found = store.find(&compile(&criteria(&[])), RESULT_CAP).unwrap();
    assert_eq!(found.len(), RESULT_CAP);
}

#[test]
fn bedrooms_is_a_minimum_threshold() {
    let store = seeded_store();

    assert_eq!(ids(&search(&store, &[("bedrooms", "4")])), vec![3, 4]);
    assert_eq!(search(&store, &[("bedrooms", "0")]).len(), 4);
    assert_eq!(search(&store, &[("bedrooms", "abc")]).len(), 4);
}

#[test]
fn budget_search_keeps_unpriced_and_zero_priced_listings() {
    let store = seeded_store();

    // Budget 300k: listing 1 is within budget, 2 is zero-priced, 3 is
    // unpriced; only 4 is priced out.
    assert_eq!(ids(&search(&store, &[("budget", "300000")])), vec![1, 2, 3]);

    // One unit below listing 1's price: it drops out, the unpriced and
    // zero-priced listings stay.
    assert_eq!(ids(&search(&store, &[("budget", "249999")])), vec![2, 3]);
}

#[test]
fn size_range_bounds_one_field() {
    let store = seeded_store();

    assert_eq!(
        ids(&search(&store, &[("minSize", "500"), ("maxSize", "1500")])),
        vec![1, 2]
    );
    assert_eq!(ids(&search(&store, &[("minSize", "2000")])), vec![3, 4]);
    assert_eq!(ids(&search(&store, &[("maxSize", "1000")])), vec![2]);
}

#[test]
fn location_is_case_insensitive_substring() {
    let store = seeded_store();

    assert_eq!(ids(&search(&store, &[("location", "Austin")])), vec![1, 2]);
    assert_eq!(ids(&search(&store, &[("location", "AUSTIN")])), vec![1, 2]);
    assert_eq!(ids(&search(&store, &[("location", "tx")])), vec![1, 3, 4]);
}

#[test]
fn amenities_match_on_intersection() {
    let store = seeded_store();

    assert_eq!(
        ids(&search(&store, &[("amenities", "pool, gym")])),
        vec![1, 2, 4]
    );
    assert_eq!(ids(&search(&store, &[("amenities", "garden")])), vec![3]);
    assert!(search(&store, &[("amenities", "helipad")]).is_empty());
}

#[test]
fn combined_criteria_intersect() {
    let store = seeded_store();

    let found = search(
        &store,
        &[
            ("location", "austin"),
            ("budget", "300000"),
            ("bedrooms", "3"),
            ("amenities", "pool"),
        ],
    );
    assert_eq!(ids(&found), vec![1]);
}

#[test]
fn compilation_is_idempotent() {
    let criteria = criteria(&[
        ("budget", "300000"),
        ("location", "Austin"),
        ("minSize", "500"),
        ("maxSize", "1500"),
        ("amenities", "pool,gym"),
    ]);

    assert_eq!(compile(&criteria), compile(&criteria));
}
