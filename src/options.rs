use crate::error::Error;
use crate::heap::KeyedPriorityQueue;
use crate::key_index::Key;
use crate::polarity::Polarity;
use alloc::vec::Vec;

/// Builder covering a [`KeyedPriorityQueue`]'s construction-time options:
/// polarity, a capacity reservation hint, and a batch of initial entries
/// (built via Floyd heapify rather than one `add` per entry).
pub struct Options<K, V> {
    max_heap: bool,
    capacity: usize,
    initial_entries: Vec<(K, f64, V)>,
}

impl<K, V> Options<K, V> {
    /// Starts from the defaults: min-heap, no capacity reservation, no
    /// initial entries.
    pub fn new() -> Self {
        Self {
            max_heap: false,
            capacity: 0,
            initial_entries: Vec::new(),
        }
    }

    /// Selects max-heap polarity when `max_heap` is true (min-heap is the
    /// default).
    pub fn max_heap(mut self, max_heap: bool) -> Self {
        self.max_heap = max_heap;
        self
    }

    /// Reserves storage for at least `capacity` entries up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the heap with `entries`, consumed via bulk construction.
    pub fn initial_entries(mut self, entries: impl IntoIterator<Item = (K, f64, V)>) -> Self {
        self.initial_entries = entries.into_iter().collect();
        self
    }

    /// Builds the heap, failing if `initial_entries` contained a duplicate
    /// key or a NaN value.
    pub fn build(self) -> Result<KeyedPriorityQueue<K, V>, Error>
    where
        K: Key,
    {
        let polarity = if self.max_heap { Polarity::Max } else { Polarity::Min };
        if self.initial_entries.is_empty() {
            Ok(if self.max_heap {
                KeyedPriorityQueue::with_capacity_max(self.capacity)
            } else {
                KeyedPriorityQueue::with_capacity(self.capacity)
            })
        } else {
            KeyedPriorityQueue::try_from_entries(self.initial_entries, polarity)
        }
    }
}

impl<K, V> Default for Options<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
