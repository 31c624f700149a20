//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check storage, freshness and key construction.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheKey, CacheStore};
use crate::models::requests::split_tags;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Cache keys shaped like the ones the handlers build
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,16}".prop_map(|q| format!("search:{:?}:0:20:", q)),
        "[0-9]{1,6}".prop_map(|id| format!("details:{}", id)),
        Just("featured".to_string()),
        Just("tags".to_string()),
    ]
}

/// Small JSON payloads
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u32>().prop_map(|n| json!({ "total": n, "results": [] })),
        "[a-zA-Z ]{0,32}".prop_map(|s| json!({ "title": s })),
        Just(Value::Null),
    ]
}

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: Value },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A put followed immediately by a get returns the stored value.
    #[test]
    fn prop_put_then_get(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_TTL);

        store.put(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // The last put for a key wins and only one entry exists for it.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.put(key.clone(), first);
        store.put(key.clone(), second.clone());

        prop_assert_eq!(store.get(&key), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // Hits and misses across any sequence of operations match a model map.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Value> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    model.insert(key.clone(), value.clone());
                    store.put(key, value);
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    prop_assert_eq!(got.as_ref(), model.get(&key));
                    if got.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }

    // An entry is fresh strictly before its TTL elapses and stale from then on.
    #[test]
    fn prop_freshness_boundary(
        stored_at in 0u64..1_000_000_000,
        ttl_ms in 1u64..1_000_000,
        elapsed in 0u64..2_000_000
    ) {
        let entry = CacheEntry { value: Value::Null, stored_at };
        prop_assert_eq!(entry.is_fresh_at(stored_at + elapsed, ttl_ms), elapsed < ttl_ms);
    }

    // Tag order and duplicates do not change the search key.
    #[test]
    fn prop_search_key_ignores_tag_order(
        query in "[a-z ]{0,16}",
        from in 0u32..500,
        size in 1u32..100,
        tags in prop::collection::vec(tag_strategy(), 0..6)
    ) {
        let forward = split_tags(&tags.join(","));
        let mut reversed_input = tags.clone();
        reversed_input.reverse();
        reversed_input.extend(tags.iter().cloned());
        let reversed = split_tags(&reversed_input.join(","));

        let a = CacheKey::Search { query: &query, from, size, tags: &forward };
        let b = CacheKey::Search { query: &query, from, size, tags: &reversed };

        prop_assert_eq!(a.to_string(), b.to_string());
    }

    // Changing any search parameter changes the key.
    #[test]
    fn prop_search_key_distinguishes_params(
        query in "[a-z]{1,16}",
        from in 0u32..500,
        size in 1u32..100,
        tag in tag_strategy()
    ) {
        let none: Vec<String> = Vec::new();
        let one = vec![tag];
        let base = CacheKey::Search { query: &query, from, size, tags: &none }.to_string();

        let other_query = format!("{}x", query);
        let variants = [
            CacheKey::Search { query: &other_query, from, size, tags: &none },
            CacheKey::Search { query: &query, from: from + 1, size, tags: &none },
            CacheKey::Search { query: &query, from, size: size + 1, tags: &none },
            CacheKey::Search { query: &query, from, size, tags: &one },
        ];

        for variant in variants {
            prop_assert_ne!(variant.to_string(), base.clone());
        }
    }
}

// == Additional Unit Tests for Edge Cases ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_value_absent_after_ttl() {
        let mut store = CacheStore::new(Duration::from_millis(30));

        store.put("featured".to_string(), json!({ "total": 8 }));
        assert!(store.get("featured").is_some());

        sleep(Duration::from_millis(60));
        assert!(store.get("featured").is_none());
        assert_eq!(store.stats().expired, 1);
    }

    #[test]
    fn test_details_keys_differ_by_id() {
        assert_ne!(
            CacheKey::Details { id: "1" }.to_string(),
            CacheKey::Details { id: "2" }.to_string()
        );
    }
}
