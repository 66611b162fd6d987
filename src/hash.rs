//! FNV-1 64-bit hashing for table keys

use std::hash::{BuildHasher, Hash, Hasher};

/// Fowler–Noll–Vo (FNV-1) 64-bit non-cryptographic hasher
///
/// Keys reach it through their `Hash` impl, which is the structural byte
/// encoding the table relies on.
#[derive(Debug, Clone, Copy)]
pub struct Fnv64Hasher {
    /// Running hash state
    hash: u64,
}

impl Fnv64Hasher {
    /// 64-bit FNV prime
    const PRIME: u64 = 0x0000_0100_0000_01B3;
    /// 64-bit FNV offset basis
    const OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

    /// Creates a hasher initialised with the offset basis
    #[must_use]
    pub const fn new() -> Self {
        Self { hash: Self::OFFSET_BASIS }
    }
}

impl Default for Fnv64Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv64Hasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash = self.hash.wrapping_mul(Self::PRIME);
            self.hash ^= u64::from(byte);
        }
    }
}

/// Builder for [`Fnv64Hasher`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv64BuildHasher;

impl BuildHasher for Fnv64BuildHasher {
    type Hasher = Fnv64Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv64Hasher::new()
    }
}

/// Hashes a key with a fresh hasher, so repeated calls never share state
#[must_use]
pub fn hash_key<Q: Hash + ?Sized>(key: &Q) -> u64 {
    Fnv64BuildHasher.hash_one(key)
}
