// File: crates/sparkchart-core/src/intern.rs
// Summary: Map keyed by a caller-supplied key function, remembering the first value seen per key.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A map from values of `K` to `V` where two values are the same entry when
/// `key_fn` gives them equal keys. The first value inserted for a key is
/// kept as its canonical (interned) form.
///
/// Use [`InternMap::new`] when `K` is itself hashable, or
/// [`InternMap::with_key`] to supply the identity of types such as `f64`.
#[derive(Clone)]
pub struct InternMap<K, V, Q = K> {
    entries: FxHashMap<Q, (K, V)>,
    key_fn: fn(&K) -> Q,
}

impl<K: Hash + Eq + Clone, V> InternMap<K, V, K> {
    pub fn new() -> Self {
        Self::with_key(K::clone)
    }
}

impl<K: Hash + Eq + Clone, V> Default for InternMap<K, V, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, Q: Hash + Eq> InternMap<K, V, Q> {
    pub fn with_key(key_fn: fn(&K) -> Q) -> Self {
        Self { entries: FxHashMap::default(), key_fn }
    }

    /// Key function in use; lets derived maps share the same identity.
    pub fn key_fn(&self) -> fn(&K) -> Q {
        self.key_fn
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.entries.get(&(self.key_fn)(k)).map(|(_, v)| v)
    }

    pub fn contains(&self, k: &K) -> bool {
        self.entries.contains_key(&(self.key_fn)(k))
    }

    /// Canonical value stored for the key of `k`.
    pub fn interned(&self, k: &K) -> Option<&K> {
        self.entries.get(&(self.key_fn)(k)).map(|(first, _)| first)
    }

    /// Inserts or replaces the value for `k`'s key. An existing entry keeps
    /// its interned key. Returns the previous value.
    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        let key = (self.key_fn)(&k);
        match self.entries.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, v)),
            None => {
                self.entries.insert(key, (k, v));
                None
            }
        }
    }

    pub fn remove(&mut self, k: &K) -> Option<(K, V)> {
        self.entries.remove(&(self.key_fn)(k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, Q> std::fmt::Debug for InternMap<K, V, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.values().map(|(k, v)| (k, v))).finish()
    }
}
