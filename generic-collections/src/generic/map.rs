//! Key/value map exposing its keys and values as separate sequences.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// A thin wrapper around [`HashMap`] with key and value projections.
///
/// Insertion, lookup and removal go through the wrapped map via `Deref`.
///
/// # Ordering
///
/// [`Map::keys`] and [`Map::vals`] follow the iteration order of the
/// underlying `HashMap`, which is unspecified. Callers must not rely on it
/// being stable between calls, between instances, or between runs. Within a
/// single unmodified map the two projections do line up pair-wise.
///
/// # Examples
///
/// ```rust
/// use generic_collections::generic::map::Map;
///
/// let mut map = Map::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// let mut keys = map.keys();
/// keys.sort();
/// assert_eq!(keys, vec!["a", "b"]);
///
/// let mut vals = map.vals();
/// vals.sort();
/// assert_eq!(vals, vec![1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map<K: Eq + Hash, V> {
    inner: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner
    }

    /// Returns every key, in unspecified order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.keys().cloned().collect()
    }

    /// Returns every value, in unspecified order.
    pub fn vals(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.values().cloned().collect()
    }
}

impl<K: Eq + Hash, V> Deref for Map<K, V> {
    type Target = HashMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K: Eq + Hash, V> DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<K: Eq + Hash, V> From<HashMap<K, V>> for Map<K, V> {
    fn from(inner: HashMap<K, V>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
        items.sort();
        items
    }

    #[test]
    fn test_empty_map() {
        let map = Map::<String, u32>::new();
        assert!(map.keys().is_empty());
        assert!(map.vals().is_empty());
    }

    #[test]
    fn test_keys_and_vals() {
        let map: Map<_, _> = [("x", 10), ("y", 20), ("z", 30)].into_iter().collect();
        assert_eq!(sorted(map.keys()), vec!["x", "y", "z"]);
        assert_eq!(sorted(map.vals()), vec![10, 20, 30]);
    }

    #[test]
    fn test_projections_line_up() {
        let map: Map<u32, u32> = (0..16).map(|k| (k, k * 100)).collect();
        let pairs: Vec<_> = map.keys().into_iter().zip(map.vals()).collect();
        for (key, val) in pairs {
            assert_eq!(val, key * 100);
        }
    }

    #[test]
    fn test_duplicate_values_are_kept() {
        let mut map = Map::new();
        map.insert(1, "same");
        map.insert(2, "same");
        assert_eq!(map.vals(), vec!["same", "same"]);
    }

    #[test]
    fn test_insert_overwrites_existing_key() {
        let mut map = Map::new();
        map.insert("k", 1);
        map.insert("k", 2);
        assert_eq!(map.keys(), vec!["k"]);
        assert_eq!(map.vals(), vec![2]);
    }

    #[test]
    fn test_from_hash_map_round_trip() {
        let mut inner = HashMap::new();
        inner.insert(7, 'a');
        let map = Map::from(inner.clone());
        assert_eq!(map.get(&7), Some(&'a'));
        assert_eq!(map.into_inner(), inner);
    }
}
