/// A single live record in the heap's arena.
///
/// `position` always points at the slot of `tree` (see
/// [`crate::heap::KeyedPriorityQueue`]) whose value is this entry's own
/// arena index; it is kept in sync by every sift routine.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: f64,
    pub(crate) change_index: u64,
    pub(crate) position: usize,
    pub(crate) payload: V,
}
