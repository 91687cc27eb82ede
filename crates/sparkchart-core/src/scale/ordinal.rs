// File: crates/sparkchart-core/src/scale/ordinal.rs
// Summary: Ordinal scale assigning outputs to discrete inputs in first-seen order.

use std::hash::Hash;

use crate::intern::InternMap;

/// What an ordinal scale returns for a value outside its domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Unknown<V> {
    /// Unseen values join the domain and take the next output.
    Implicit,
    /// Unseen values map to nothing.
    Undefined,
    /// Unseen values map to this output.
    Value(V),
}

/// Discrete scale: the i-th distinct domain value maps to
/// `range[i % range.len()]`, so outputs wrap when the range is shorter.
#[derive(Clone, Debug)]
pub struct OrdinalScale<K, V, Q = K> {
    index: InternMap<K, usize, Q>,
    domain: Vec<K>,
    range: Vec<V>,
    unknown: Unknown<V>,
}

impl<K: Hash + Eq + Clone, V: Clone> OrdinalScale<K, V, K> {
    pub fn new() -> Self {
        Self::with_key(K::clone)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Default for OrdinalScale<K, V, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, Q: Hash + Eq> OrdinalScale<K, V, Q> {
    /// Empty scale whose domain identity is given by `key_fn` (e.g.
    /// `f64::to_bits` for float categories).
    pub fn with_key(key_fn: fn(&K) -> Q) -> Self {
        Self {
            index: InternMap::with_key(key_fn),
            domain: Vec::new(),
            range: Vec::new(),
            unknown: Unknown::Implicit,
        }
    }

    pub fn with_domain(mut self, values: impl IntoIterator<Item = K>) -> Self {
        self.set_domain(values);
        self
    }

    pub fn with_range(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.set_range(values);
        self
    }

    pub fn with_unknown(mut self, unknown: Unknown<V>) -> Self {
        self.unknown = unknown;
        self
    }

    /// Replaces the domain, dropping repeated values (by key) after their
    /// first occurrence.
    pub fn set_domain(&mut self, values: impl IntoIterator<Item = K>) {
        self.index = InternMap::with_key(self.index.key_fn());
        self.domain.clear();
        for v in values {
            if self.index.contains(&v) {
                continue;
            }
            self.index.insert(v.clone(), self.domain.len());
            self.domain.push(v);
        }
    }

    /// Replaces the outputs; the domain is untouched.
    pub fn set_range(&mut self, values: impl IntoIterator<Item = V>) {
        self.range = values.into_iter().collect();
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> &[V] {
        &self.range
    }

    pub fn unknown(&self) -> &Unknown<V> {
        &self.unknown
    }

    /// Output for `value`. In [`Unknown::Implicit`] mode an unseen value is
    /// appended to the domain first.
    pub fn map(&mut self, value: &K) -> Option<V> {
        if let Some(&i) = self.index.get(value) {
            return self.output(i);
        }
        match &self.unknown {
            Unknown::Implicit => {
                let i = self.domain.len();
                self.index.insert(value.clone(), i);
                self.domain.push(value.clone());
                self.output(i)
            }
            Unknown::Undefined => None,
            Unknown::Value(v) => Some(v.clone()),
        }
    }

    /// Output for `value` without growing the domain. Unseen values give the
    /// unknown output, or `None` in implicit mode.
    pub fn get(&self, value: &K) -> Option<V> {
        match self.index.get(value) {
            Some(&i) => self.output(i),
            None => match &self.unknown {
                Unknown::Value(v) => Some(v.clone()),
                Unknown::Implicit | Unknown::Undefined => None,
            },
        }
    }

    fn output(&self, i: usize) -> Option<V> {
        if self.range.is_empty() {
            return None;
        }
        self.range.get(i % self.range.len()).cloned()
    }
}
