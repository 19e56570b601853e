use std::hash::Hash;

use crate::{error::BijectionError, index::Idx, FxHashMap};

/// A one-to-one mapping between keys and indices.
///
/// Both directions are backed by a hash map, so lookups either way are O(1).
/// Inserting a key or an index that is already mapped is rejected, which
/// keeps the two maps inverse to each other.
#[derive(Clone)]
pub struct Bijection<K, I> {
    forward: FxHashMap<K, I>,
    backward: FxHashMap<I, K>,
}

impl<K, I> Bijection<K, I> {
    pub fn new() -> Self {
        Self {
            forward: FxHashMap::default(),
            backward: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &I)> {
        self.forward.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.forward.keys()
    }
}

impl<K, I> Default for Bijection<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I> Bijection<K, I>
where
    K: Clone + Eq + Hash,
    I: Idx,
{
    pub fn add(&mut self, key: K, index: I) -> Result<(), BijectionError> {
        if self.forward.contains_key(&key) {
            return Err(BijectionError::DuplicateKey);
        }
        if self.backward.contains_key(&index) {
            return Err(BijectionError::DuplicateIndex(index.index()));
        }
        self.backward.insert(index, key.clone());
        self.forward.insert(key, index);
        Ok(())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.forward.contains_key(key)
    }

    pub fn contains_index(&self, index: I) -> bool {
        self.backward.contains_key(&index)
    }

    pub fn get_value<Q>(&self, key: &Q) -> Option<I>
    where
        K: std::borrow::Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.forward.get(key).copied()
    }

    pub fn get_key(&self, index: I) -> Option<&K> {
        self.backward.get(&index)
    }

    /// Removes `key` and returns the index it was mapped to.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<I>
    where
        K: std::borrow::Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.forward.remove(key)?;
        self.backward.remove(&index);
        Some(index)
    }
}

impl<K: std::fmt::Debug, I: std::fmt::Debug> std::fmt::Debug for Bijection<K, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut map: Bijection<&str, usize> = Bijection::new();
        map.add("a", 0).unwrap();
        map.add("b", 3).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_value("a"), Some(0));
        assert_eq!(map.get_key(3), Some(&"b"));
        assert!(map.contains_key("b"));
        assert!(map.contains_index(0));
        assert!(!map.contains_index(1));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut map: Bijection<String, usize> = Bijection::new();
        map.add("x".to_string(), 1).unwrap();
        assert_eq!(
            map.add("x".to_string(), 2),
            Err(BijectionError::DuplicateKey)
        );
        assert_eq!(
            map.add("y".to_string(), 1),
            Err(BijectionError::DuplicateIndex(1))
        );
        assert_eq!(map.len(), 1);
        assert!(!map.contains_index(2));
    }

    #[test]
    fn test_remove_key_frees_index() {
        let mut map: Bijection<&str, usize> = Bijection::new();
        map.add("a", 0).unwrap();
        assert_eq!(map.remove_key("a"), Some(0));
        assert_eq!(map.remove_key("a"), None);
        assert!(map.is_empty());
        map.add("b", 0).unwrap();
        assert_eq!(map.get_key(0), Some(&"b"));
    }
}
