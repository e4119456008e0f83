//! Checks every storing `LabelCache` must pass, and a counting spy for
//! observing how a translator uses its cache.
use crate::cache::{LabelCache, SharedCache};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Run all contract checks on a fresh, empty cache.
pub fn assert_cache_contract<C: LabelCache>(cache: C) {
    starts_empty(&cache);
    get_after_insert(&cache);
    first_insert_wins(&cache);
    len_counts_distinct_identifiers(&cache);
    handles_empty_and_non_ascii_keys(&cache);
}

pub fn starts_empty<C: LabelCache>(cache: &C) {
    assert!(cache.is_empty(), "cache is not empty before the first insert");
    assert_eq!(cache.get("NumberOfEmployees"), None);
}

pub fn get_after_insert<C: LabelCache>(cache: &C) {
    let stored = cache.insert("NumberOfEmployees".into(), "従業員数".into());
    assert_eq!(stored, "従業員数");
    assert_eq!(cache.get("NumberOfEmployees").as_deref(), Some("従業員数"));
}

pub fn first_insert_wins<C: LabelCache>(cache: &C) {
    let stored = cache.insert("NumberOfEmployees".into(), "別の値".into());
    assert_eq!(stored, "従業員数", "second insert replaced the first label");
    assert_eq!(cache.get("NumberOfEmployees").as_deref(), Some("従業員数"));
}

pub fn len_counts_distinct_identifiers<C: LabelCache>(cache: &C) {
    let before = cache.len();
    cache.insert("LossOnDisaster".into(), "災害損失".into());
    cache.insert("LossOnDisaster".into(), "災害損失".into());
    assert_eq!(cache.len(), before + 1);
}

pub fn handles_empty_and_non_ascii_keys<C: LabelCache>(cache: &C) {
    cache.insert(String::new(), String::new());
    cache.insert("売上高".into(), String::new());
    assert_eq!(cache.get("").as_deref(), Some(""));
    assert_eq!(cache.get("売上高").as_deref(), Some(""));
}

/// `SharedCache` that counts lookups, hits and stores.
#[derive(Debug, Default)]
pub struct CountingCache {
    inner: SharedCache,
    gets: AtomicUsize,
    hits: AtomicUsize,
    inserts: AtomicUsize,
}

impl CountingCache {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::Relaxed)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::Relaxed)
    }
}

impl LabelCache for CountingCache {
    fn get(&self, identifier: &str) -> Option<String> {
        self.gets.fetch_add(1, Ordering::Relaxed);
        let found = self.inner.get(identifier);
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    fn insert(&self, identifier: String, label: String) -> String {
        self.inserts.fetch_add(1, Ordering::Relaxed);
        self.inner.insert(identifier, label)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[test]
fn counting_cache_passes_contract() {
    assert_cache_contract(CountingCache::default());
}
