use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered map from elements to dense 1-based indices.
///
/// Indices are handed out in first-seen order and never change. Lookups
/// never insert; a rebuilt numbering starts from a fresh map.
#[derive(Debug, Clone)]
pub struct IndexedMap<K> {
    keys: Vec<K>,
    indices: HashMap<K, usize>,
}

impl<K> Default for IndexedMap<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> IndexedMap<K> {
    /// Adds `key` if unseen and returns its index either way.
    pub fn add(&mut self, key: K) -> usize {
        if let Some(&index) = self.indices.get(&key) {
            return index;
        }
        self.keys.push(key);
        let index = self.keys.len();
        self.indices.insert(key, index);
        index
    }

    /// Index of `key`, or `None` if it was never added.
    #[must_use]
    pub fn find_index(&self, key: K) -> Option<usize> {
        self.indices.get(&key).copied()
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.indices.contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// `(index, key)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, K)> + '_ {
        self.keys.iter().enumerate().map(|(i, &key)| (i + 1, key))
    }
}
