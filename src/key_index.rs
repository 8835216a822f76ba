#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::{collections::HashMap, hash::Hash};

/// Bound required of a [`KeyedPriorityQueue`](crate::KeyedPriorityQueue) key
/// type: hashable under the `std` feature, ordered under plain `alloc`,
/// mirroring the backing map each build picks.
#[cfg(feature = "std")]
pub trait Key: Eq + Clone + Hash {}
#[cfg(feature = "std")]
impl<T> Key for T where T: Eq + Clone + Hash {}

/// Bound required of a [`KeyedPriorityQueue`](crate::KeyedPriorityQueue) key
/// type: hashable under the `std` feature, ordered under plain `alloc`,
/// mirroring the backing map each build picks.
#[cfg(not(feature = "std"))]
pub trait Key: Eq + Clone + Ord {}
#[cfg(not(feature = "std"))]
impl<T> Key for T where T: Eq + Clone + Ord {}

#[cfg(not(feature = "std"))]
type Map<K> = BTreeMap<K, usize>;
#[cfg(feature = "std")]
type Map<K> = HashMap<K, usize>;

/// Maps a live key to the arena index of its entry.
///
/// `std` builds back this with a `HashMap`; `no_std` builds (still
/// requiring `alloc`) fall back to a `BTreeMap`, mirroring the `std`/`no_std`
/// split used elsewhere in this crate.
#[derive(Clone, Debug)]
pub(crate) struct KeyIndex<K>
where
    K: Key,
{
    map: Map<K>,
}

impl<K> KeyIndex<K>
where
    K: Key,
{
    pub(crate) fn new() -> Self {
        Self { map: Map::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            #[cfg(not(feature = "std"))]
            map: {
                let _ = capacity;
                Map::new()
            },
            #[cfg(feature = "std")]
            map: Map::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub(crate) fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: K, arena_index: usize) {
        debug_assert!(!self.map.contains_key(&key), "re-inserting already indexed key");
        self.map.insert(key, arena_index);
    }

    pub(crate) fn remove(&mut self, key: &K) {
        debug_assert!(self.map.contains_key(key), "removing an unindexed key");
        self.map.remove(key);
    }
}
