use std::{
    borrow::Borrow,
    fmt::Debug,
    hash::Hash,
    iter::{Flatten, FusedIterator},
    mem,
};

use log::{debug, trace};

use crate::{
    error::TableError,
    hash::hash_key,
    sequence::Sequence,
};

/// Number of buckets a fresh table starts with
pub const MIN_CAPACITY: usize = 2;

/// A key-value pair stored in the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Returns the entry's key
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's value
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// An entry together with the precomputed hash of its key
#[derive(Debug, Clone)]
struct Node<K, V> {
    /// Hash of `entry.key`, kept so rehashing never calls the hasher again
    hash: u64,
    /// The stored pair
    entry: Entry<K, V>,
}

/// Nodes whose keys map to the same bucket, in append order
type Chain<K, V> = Vec<Node<K, V>>;

/// Snapshot of the table's shape, used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    /// Number of bucket slots
    pub capacity: usize,
    /// Number of non-empty bucket slots
    pub occupied_buckets: usize,
    /// Number of stored entries
    pub items: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

/// A hash table resolving collisions by separate chaining.
///
/// Capacity is a power of two starting at [`MIN_CAPACITY`] and doubles as soon
/// as more than half of the buckets are occupied.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    /// One chain per bucket slot; its length is the capacity
    buckets: Vec<Chain<K, V>>,
    /// Count of non-empty chains, drives the load-factor check
    occupied_buckets: usize,
    /// Count of stored entries
    item_count: usize,
}

impl<K, V> Default for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Allocates `capacity` empty chains
fn empty_buckets<K, V>(capacity: usize) -> Vec<Chain<K, V>> {
    std::iter::repeat_with(Vec::new).take(capacity).collect()
}

impl<K, V> HashTable<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty table with [`MIN_CAPACITY`] buckets
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` buckets, rounded up to a
    /// power of two
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY).next_power_of_two();

        Self { buckets: empty_buckets(capacity), occupied_buckets: 0, item_count: 0 }
    }

    /// Returns the hash of `key` and the bucket it maps to at the current
    /// capacity
    #[must_use]
    pub fn hash<Q>(&self, key: &Q) -> (u64, usize)
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let hash = hash_key(key);
        (hash, self.index_for(hash))
    }

    /// Maps a hash onto a bucket index
    #[allow(clippy::cast_possible_truncation)]
    fn index_for(&self, hash: u64) -> usize {
        // capacity is a power of two, so masking equals `hash % capacity`
        (hash as usize) & self.buckets.len().saturating_sub(1)
    }

    /// Returns true once more than half of the buckets are occupied
    fn is_full(&self) -> bool {
        self.occupied_buckets > self.buckets.len() >> 1
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (hash, _) = self.hash(&key);
        self.insert_node(Node { hash, entry: Entry { key, value } })
    }

    /// Places a node and grows the table if the load factor is exceeded
    fn insert_node(&mut self, node: Node<K, V>) -> Option<V> {
        let previous = self.place(node);

        if self.is_full() {
            self.resize();
        }

        previous
    }

    /// Places a node in its bucket without checking the load factor
    fn place(&mut self, node: Node<K, V>) -> Option<V> {
        let index = self.index_for(node.hash);
        let chain = self.buckets.get_mut(index)?;

        if chain.is_empty() {
            chain.push(node);
            self.occupied_buckets = self.occupied_buckets.saturating_add(1);
            self.item_count = self.item_count.saturating_add(1);
            return None;
        }

        let previous = Self::handle_collision(chain, node);
        if previous.is_none() {
            self.item_count = self.item_count.saturating_add(1);
        }
        previous
    }

    /// Overwrites the value of a matching node, or appends the node to the
    /// chain. Returns the replaced value.
    fn handle_collision(chain: &mut Chain<K, V>, node: Node<K, V>) -> Option<V> {
        if let Some(existing) = chain
            .iter_mut()
            .find(|existing| existing.hash == node.hash && existing.entry.key == node.entry.key)
        {
            return Some(mem::replace(&mut existing.entry.value, node.entry.value));
        }

        chain.push(node);
        None
    }

    /// Finds the node holding `key`
    fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (hash, index) = self.hash(key);
        self.buckets
            .get(index)?
            .iter()
            .find(|node| node.hash == hash && node.entry.key.borrow() == key)
    }

    /// Retrieves the value for `key`
    ///
    /// # Errors
    ///
    /// Returns [`TableError::KeyNotFound`] when no entry matches `key`.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, TableError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.try_get(key).ok_or_else(|| TableError::KeyNotFound(format!("{key:?}")))
    }

    /// Retrieves the value for `key`, or `None` if it is absent
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).map(|node| &node.entry.value)
    }

    /// Get a mutable reference to the value for `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (hash, index) = self.hash(key);
        self.buckets
            .get_mut(index)?
            .iter_mut()
            .find(|node| node.hash == hash && node.entry.key.borrow() == key)
            .map(|node| &mut node.entry.value)
    }

    /// Removes `key` from its chain and returns its value. Other keys sharing
    /// the bucket are kept.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (hash, index) = self.hash(key);
        let chain = self.buckets.get_mut(index)?;
        let position = chain
            .iter()
            .position(|node| node.hash == hash && node.entry.key.borrow() == key)?;

        let removed = chain.remove(position);
        if chain.is_empty() {
            self.occupied_buckets = self.occupied_buckets.saturating_sub(1);
        }
        self.item_count = self.item_count.saturating_sub(1);

        trace!("deleted entry from bucket {index}, {} items left", self.item_count);
        Some(removed.entry.value)
    }

    /// Doubles the capacity and rehashes every entry into the new buckets
    fn resize(&mut self) {
        let new_capacity = self.buckets.len().saturating_mul(2);
        debug!(
            "resizing table from {} to {new_capacity} buckets ({} items, {} occupied)",
            self.buckets.len(),
            self.item_count,
            self.occupied_buckets
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.occupied_buckets = 0;
        self.item_count = 0;

        for node in old_buckets.into_iter().flatten() {
            self.insert_node(node);
        }
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.occupied_buckets = 0;
        self.item_count = 0;
    }
}

impl<K, V> HashTable<K, V> {
    /// Returns the number of entries in the table
    #[must_use]
    pub const fn len(&self) -> usize {
        self.item_count
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of non-empty buckets
    #[must_use]
    pub const fn occupied_buckets(&self) -> usize {
        self.occupied_buckets
    }

    /// Returns the ratio of occupied buckets to capacity
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.occupied_buckets as f64 / self.buckets.len() as f64
    }

    /// Returns the table's current shape
    #[must_use]
    pub fn stats(&self) -> ChainStats {
        ChainStats {
            capacity: self.buckets.len(),
            occupied_buckets: self.occupied_buckets,
            items: self.item_count,
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Returns an iterator over the entries, bucket by bucket and then in
    /// chain order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: &self.buckets, bucket: 0, position: 0, remaining: self.item_count }
    }
}

impl<K, V> Sequence for HashTable<K, V> {
    type Item<'a>
        = &'a Entry<K, V>
    where
        Self: 'a;
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;

    fn sequence(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

/// Iterator over the entries of a [`HashTable`]
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    /// The table's buckets
    buckets: &'a [Chain<K, V>],
    /// Bucket currently being walked
    bucket: usize,
    /// Next position inside the current chain
    position: usize,
    /// Entries not yet yielded
    remaining: usize,
}

// Cloning only copies the cursor, so no `K: Clone` or `V: Clone` bound.
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets,
            bucket: self.bucket,
            position: self.position,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(chain) = self.buckets.get(self.bucket) {
            if let Some(node) = chain.get(self.position) {
                self.position = self.position.saturating_add(1);
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.entry);
            }
            self.bucket = self.bucket.saturating_add(1);
            self.position = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over the entries of a [`HashTable`]
#[derive(Debug)]
pub struct IntoIter<K, V> {
    /// Remaining nodes, bucket by bucket
    nodes: Flatten<std::vec::IntoIter<Chain<K, V>>>,
    /// Entries not yet yielded
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> IntoIterator for HashTable<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { remaining: self.item_count, nodes: self.buckets.into_iter().flatten() }
    }
}
