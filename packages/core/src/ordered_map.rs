//! An insertion-ordered map used for every attribute category.

use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// A map that remembers the order in which keys were first inserted.
///
/// Overwriting an existing key keeps its original position, and deleting a key
/// shifts the later entries down so the remaining order is untouched. Iteration
/// always walks the entries in that order, which is what makes rendering
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`.
    ///
    /// New keys go to the end of the iteration order. Existing keys keep their slot.
    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Get the value for `key`, inserting the result of `default` at the end first if it is missing.
    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        self.entries.entry(key).or_insert_with(default)
    }

    /// Remove `key` if present. Missing keys are a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut map = OrderedMap::new();
        map.set("width".to_string(), "100".to_string());
        assert_eq!(map.get("width").map(String::as_str), Some("100"));
        assert_eq!(map.get("height"), None);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut map = OrderedMap::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);
        map.set("a", 10);

        let entries: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("a", 10), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn delete_preserves_remaining_order() {
        let mut map = OrderedMap::new();
        map.set("a", 1);
        map.set("b", 2);
        map.set("c", 3);

        assert_eq!(map.delete("b"), Some(2));
        assert_eq!(map.get("b"), None);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);

        // deleting again is fine
        assert_eq!(map.delete("b"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn reinserting_after_delete_appends() {
        let mut map = OrderedMap::new();
        map.set("a", 1);
        map.set("b", 2);
        map.delete("a");
        map.set("a", 3);

        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
