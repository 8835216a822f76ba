use crate::entry::Entry;
use crate::handle::Handle;

/// A borrowed, always-current view of a live entry.
///
/// Returned by [`peek`](crate::KeyedPriorityQueue::peek),
/// [`get`](crate::KeyedPriorityQueue::get) and
/// [`get_by_handle`](crate::KeyedPriorityQueue::get_by_handle); borrows the
/// owning heap, so it cannot outlive a subsequent mutation.
#[derive(Debug)]
pub struct Item<'a, K, V> {
    entry: &'a Entry<K, V>,
    handle: Handle<K, V>,
}

impl<'a, K, V> Item<'a, K, V> {
    pub(crate) fn new(entry: &'a Entry<K, V>, handle: Handle<K, V>) -> Self {
        Self { entry, handle }
    }

    /// The entry's key.
    pub fn key(&self) -> &K {
        &self.entry.key
    }

    /// The entry's current priority value.
    pub fn value(&self) -> f64 {
        self.entry.value
    }

    /// The entry's payload.
    pub fn payload(&self) -> &V {
        &self.entry.payload
    }

    /// A fresh handle addressing this same entry.
    pub fn handle(&self) -> Handle<K, V> {
        self.handle
    }
}
