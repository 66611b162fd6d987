//! # Chain Table
//!
//! A Rust implementation of a hash table with separate chaining.
//!
//! Every bucket holds a chain of the entries whose keys hash into it. The
//! table starts with two buckets and doubles, rehashing every entry, as soon as
//! more than half of its buckets are occupied. Keys are hashed with FNV-1
//! (64-bit) through their `Hash` impl.
//!
//! Any container implementing [`Sequence`] gets `map`, `filter` and
//! `for_each`, with results collected into a [`List`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use chaintable::{HashTable, TableError};
//!
//! // Create a new table
//! let mut table = HashTable::new();
//!
//! // Insert values
//! table.insert("apple".to_string(), 1);
//! table.insert("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(table.get("apple"), Ok(&1));
//!
//! // Update values
//! table.insert("apple".to_string(), 10);
//! assert_eq!(table.get("apple"), Ok(&10));
//! assert_eq!(table.len(), 2);
//!
//! // Remove values
//! table.delete("apple");
//! assert!(matches!(table.get("apple"), Err(TableError::KeyNotFound(_))));
//! assert_eq!(table.try_get("apple"), None);
//! ```
//!
//! ## Sequences
//!
//! ```rust
//! use chaintable::{Collection, HashTable, Sequence};
//!
//! let table: HashTable<u32, u32> = (0..10).map(|i| (i, i * i)).collect();
//!
//! let even = table.filter(|entry| entry.key() % 2 == 0);
//! assert_eq!(even.size(), 5);
//!
//! let squares = table.map(|entry| *entry.value());
//! assert_eq!(squares.size(), 10);
//!
//! let mut total = 0_u32;
//! table.for_each(|entry| total += *entry.value());
//! assert_eq!(total, 285);
//! ```

/// Error types returned by table lookups
mod error;
/// FNV-1 hashing for keys
pub mod hash;
/// Module implementing the separate-chaining hash table
mod hash_table;
/// Logger initialisation
pub mod logger;
/// Sequence protocol and the `List` collection
mod sequence;
/// Utility traits for the hash table
mod utils;

pub use error::TableError;
pub use hash_table::{ChainStats, Entry, HashTable, IntoIter, Iter, MIN_CAPACITY};
pub use sequence::{Collection, List, Sequence};
pub use utils::TableExtensions;
