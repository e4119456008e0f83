//! Memo of labels computed by the rule and tokenizer paths.
//!
//! Labels are a pure function of the identifier, so a cache never changes an
//! answer; it only skips recomputation. The first label stored for an
//! identifier is kept for the cache's lifetime.
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Storage for derived labels, shared by every caller of one translator.
pub trait LabelCache: Send + Sync {
    fn get(&self, identifier: &str) -> Option<String>;

    /// Store `label` unless the identifier already has one. Returns the label
    /// that is stored after the call.
    fn insert(&self, identifier: String, label: String) -> String;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: LabelCache + ?Sized> LabelCache for Arc<C> {
    #[inline]
    fn get(&self, identifier: &str) -> Option<String> {
        (**self).get(identifier)
    }

    #[inline]
    fn insert(&self, identifier: String, label: String) -> String {
        (**self).insert(identifier, label)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }
}

/// `RwLock`-guarded map. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct SharedCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SharedCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::with_capacity(capacity))),
        }
    }

    /// Copy of every cached pair, sorted by identifier.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut pairs: Vec<_> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        pairs.sort_unstable();
        pairs
    }
}

// Entries are inserted whole, so a poisoned map is still consistent.
impl LabelCache for SharedCache {
    fn get(&self, identifier: &str) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identifier)
            .cloned()
    }

    fn insert(&self, identifier: String, label: String) -> String {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(identifier)
            .or_insert(label)
            .clone()
    }

    fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Remembers nothing; every lookup recomputes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl LabelCache for NoCache {
    #[inline(always)]
    fn get(&self, _identifier: &str) -> Option<String> {
        None
    }

    #[inline(always)]
    fn insert(&self, _identifier: String, label: String) -> String {
        label
    }

    #[inline(always)]
    fn len(&self) -> usize {
        0
    }
}
