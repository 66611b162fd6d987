//! Utility traits for `HashTable`

use std::{borrow::Borrow, hash::Hash};

use crate::{HashTable, List, Sequence};

/// Extension trait for tables that provides additional utility methods
pub trait TableExtensions<K, V> {
    /// Returns the keys of the table in traversal order
    fn keys(&self) -> List<K>;

    /// Returns the values of the table in traversal order
    fn values(&self) -> List<V>;

    /// Returns true if the table contains the given key
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<K, V> TableExtensions<K, V> for HashTable<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn keys(&self) -> List<K> {
        self.map(|entry| entry.key().clone())
    }

    fn values(&self) -> List<V> {
        self.map(|entry| entry.value().clone())
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.try_get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collection;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let table: HashTable<_, _> = data.into_iter().collect();

        assert_eq!(table.get("a"), Ok(&1));
        assert_eq!(table.get("b"), Ok(&2));
        assert_eq!(table.get("c"), Ok(&3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_keys_and_values() {
        let mut table = HashTable::new();
        table.insert("a".to_string(), 1);
        table.insert("b".to_string(), 2);
        table.insert("c".to_string(), 3);

        let mut keys = table.keys().into_vec();
        keys.sort();

        let mut values = table.values().into_vec();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(table.keys().size(), table.len());
    }

    #[test]
    fn test_contains_key() {
        let mut table = HashTable::new();
        table.insert("a".to_string(), 1);

        assert!(table.contains_key("a"));
        assert!(!table.contains_key("b"));

        table.delete("a");
        assert!(!table.contains_key("a"));
    }
}
