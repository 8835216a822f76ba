use core::marker::PhantomData;
use core::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter handing out heap identities, starting at 1 so that
/// `0` can be reserved for [`Handle::default`].
static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// An opaque, `Copy` reference to an entry previously returned by
/// [`KeyedPriorityQueue::add`](crate::KeyedPriorityQueue::add) or a similar
/// operation.
///
/// A handle carries no cached key/value/payload: it identifies an entry by
/// owning-heap id, arena slot and generation only. Reading the entry's
/// *current* state requires presenting the handle back to the owning heap
/// via [`KeyedPriorityQueue::get_by_handle`](crate::KeyedPriorityQueue::get_by_handle),
/// which is what keeps a held handle from ever observing stale data.
///
/// The default handle belongs to no heap and fails every membership check
/// with [`Error::StaleHandle`](crate::Error::StaleHandle).
pub struct Handle<K, V> {
    pub(crate) heap_id: u64,
    pub(crate) arena_index: usize,
    pub(crate) generation: u64,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Handle<K, V> {
    pub(crate) fn new(heap_id: u64, arena_index: usize, generation: u64) -> Self {
        Self {
            heap_id,
            arena_index,
            generation,
            _marker: PhantomData,
        }
    }
}

impl<K, V> Clone for Handle<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Handle<K, V> {}

impl<K, V> Default for Handle<K, V> {
    fn default() -> Self {
        Self::new(0, usize::MAX, 0)
    }
}

impl<K, V> PartialEq for Handle<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.heap_id == other.heap_id
            && self.arena_index == other.arena_index
            && self.generation == other.generation
    }
}

impl<K, V> Eq for Handle<K, V> {}

impl<K, V> core::hash::Hash for Handle<K, V> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.heap_id.hash(state);
        self.arena_index.hash(state);
        self.generation.hash(state);
    }
}

impl<K, V> core::fmt::Debug for Handle<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Handle")
            .field("heap_id", &self.heap_id)
            .field("arena_index", &self.arena_index)
            .field("generation", &self.generation)
            .finish()
    }
}
