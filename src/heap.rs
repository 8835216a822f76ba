use crate::arena::Arena;
use crate::entry::Entry;
use crate::error::Error;
use crate::handle::{next_heap_id, Handle};
use crate::identifier::Identifier;
use crate::item::Item;
use crate::key_index::{Key, KeyIndex};
use crate::polarity::Polarity;
use alloc::vec::Vec;

/// An addressable min- or max-heap: a binary heap whose entries can be
/// looked up, re-prioritised and removed by key or by [`Handle`] in
/// `O(log n)`.
///
/// Entries live in an internal [`Arena`]; the heap array itself
/// (`tree`) stores arena indices, never entries, which is what lets
/// handles stay valid across arbitrary sift-induced reshuffling of the
/// array (see the crate-level design notes).
#[derive(Clone)]
pub struct KeyedPriorityQueue<K, V>
where
    K: Key,
{
    id: u64,
    polarity: Polarity,
    tree: Vec<usize>,
    arena: Arena<K, V>,
    index: KeyIndex<K>,
    next_change_index: u64,
}

impl<K, V> KeyedPriorityQueue<K, V>
where
    K: Key,
{
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_capacity_and_polarity(0, Polarity::Min)
    }

    /// Creates an empty max-heap.
    pub fn new_max() -> Self {
        Self::with_capacity_and_polarity(0, Polarity::Max)
    }

    /// Creates an empty min-heap that can hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_polarity(capacity, Polarity::Min)
    }

    /// Creates an empty max-heap that can hold `capacity` entries without
    /// reallocating.
    pub fn with_capacity_max(capacity: usize) -> Self {
        Self::with_capacity_and_polarity(capacity, Polarity::Max)
    }

    fn with_capacity_and_polarity(capacity: usize, polarity: Polarity) -> Self {
        Self {
            id: next_heap_id(),
            polarity,
            tree: Vec::with_capacity(capacity),
            arena: Arena::with_capacity(capacity),
            index: KeyIndex::with_capacity(capacity),
            next_change_index: 1,
        }
    }

    /// Builds a heap from an iterable of `(key, value, payload)` triples
    /// using a Floyd bottom-up heapify, rather than one `add` per entry.
    ///
    /// Fails with [`Error::DuplicateKey`] or [`Error::InvalidValue`] exactly
    /// as repeated `add` calls would; on failure the partially built heap is
    /// discarded so the caller never observes a partial result.
    pub fn try_from_entries(
        entries: impl IntoIterator<Item = (K, f64, V)>,
        polarity: Polarity,
    ) -> Result<Self, Error> {
        let iter = entries.into_iter();
        let (lower, _) = iter.size_hint();
        let mut heap = Self::with_capacity_and_polarity(lower, polarity);
        for (key, value, payload) in iter {
            heap.push_unsifted(key, value, payload)?;
        }
        let n = heap.tree.len();
        if n > 1 {
            for position in (0..n / 2).rev() {
                heap.sift_up(position);
            }
        }
        Ok(heap)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The heap's polarity, fixed at construction.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Whether `key` currently addresses a live entry.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Inserts a new entry under `key` with the given priority `value` and
    /// `payload`.
    ///
    /// Fails with [`Error::DuplicateKey`] if `key` is already present, or
    /// [`Error::InvalidValue`] if `value` is NaN.
    pub fn add(&mut self, key: K, value: f64, payload: V) -> Result<Handle<K, V>, Error> {
        let (arena_index, generation) = self.push_unsifted(key, value, payload)?;
        let position = self.tree.len() - 1;
        self.sift_down(position);
        Ok(self.make_handle(arena_index, generation))
    }

    /// Inserts `key` at the end of the heap array without restoring the
    /// heap property; used by both `add` and bulk construction.
    fn push_unsifted(&mut self, key: K, value: f64, payload: V) -> Result<(usize, u64), Error> {
        if value.is_nan() {
            return Err(Error::InvalidValue);
        }
        if self.index.contains(&key) {
            return Err(Error::DuplicateKey);
        }
        let change_index = self.next_change_index;
        self.next_change_index += 1;
        let position = self.tree.len();
        let entry = Entry {
            key: key.clone(),
            value,
            change_index,
            position,
            payload,
        };
        let (arena_index, generation) = self.arena.insert(entry);
        self.tree.push(arena_index);
        self.index.insert(key, arena_index);
        Ok((arena_index, generation))
    }

    /// Changes the priority value of the entry addressed by `identifier`.
    ///
    /// Fails with [`Error::UnknownKey`] / [`Error::StaleHandle`] if the
    /// identifier no longer addresses a live entry, or
    /// [`Error::InvalidValue`] if `value` is NaN.
    pub fn change_value(
        &mut self,
        identifier: Identifier<K, V>,
        value: f64,
    ) -> Result<Handle<K, V>, Error> {
        if value.is_nan() {
            return Err(Error::InvalidValue);
        }
        let arena_index = self.resolve(&identifier)?;
        let generation = self
            .arena
            .generation_of(arena_index)
            .expect("resolve() guarantees a live slot");
        let position = {
            let entry = self
                .arena
                .get_mut(arena_index)
                .expect("resolve() guarantees a live slot");
            entry.value = value;
            entry.change_index = self.next_change_index;
            entry.position
        };
        self.next_change_index += 1;
        self.restore(position);
        Ok(self.make_handle(arena_index, generation))
    }

    /// Convenience wrapper over [`change_value`](Self::change_value) for a
    /// key identifier.
    pub fn change_value_by_key(&mut self, key: &K, value: f64) -> Result<Handle<K, V>, Error> {
        self.change_value(Identifier::Key(key.clone()), value)
    }

    /// Convenience wrapper over [`change_value`](Self::change_value) for a
    /// handle identifier.
    pub fn change_value_by_handle(
        &mut self,
        handle: Handle<K, V>,
        value: f64,
    ) -> Result<Handle<K, V>, Error> {
        self.change_value(Identifier::Handle(handle), value)
    }

    /// Changes `key`'s value if it is already present, otherwise inserts it
    /// with `payload` (which is ignored when `key` already exists).
    pub fn add_or_change_value(
        &mut self,
        key: K,
        value: f64,
        payload: V,
    ) -> Result<Handle<K, V>, Error> {
        if self.index.contains(&key) {
            self.change_value(Identifier::Key(key), value)
        } else {
            self.add(key, value, payload)
        }
    }

    /// Removes the entry addressed by `identifier`.
    ///
    /// Fails with [`Error::UnknownKey`] / [`Error::StaleHandle`] if the
    /// identifier no longer addresses a live entry.
    pub fn delete(&mut self, identifier: Identifier<K, V>) -> Result<(), Error> {
        let arena_index = self.resolve(&identifier)?;
        let sentinel = self.polarity.sentinel();
        let position = {
            let entry = self
                .arena
                .get_mut(arena_index)
                .expect("resolve() guarantees a live slot");
            entry.value = sentinel;
            entry.change_index = 0;
            entry.position
        };
        self.sift_up(position);
        debug_assert_eq!(self.tree.first().copied(), Some(arena_index));
        self.pop_root();
        Ok(())
    }

    /// Convenience wrapper over [`delete`](Self::delete) for a key
    /// identifier.
    pub fn delete_by_key(&mut self, key: &K) -> Result<(), Error> {
        self.delete(Identifier::Key(key.clone()))
    }

    /// Convenience wrapper over [`delete`](Self::delete) for a handle
    /// identifier.
    pub fn delete_by_handle(&mut self, handle: Handle<K, V>) -> Result<(), Error> {
        self.delete(Identifier::Handle(handle))
    }

    /// Borrows the root entry without removing it.
    ///
    /// Fails with [`Error::Empty`] if the heap holds no entries.
    pub fn peek(&self) -> Result<Item<'_, K, V>, Error> {
        let arena_index = *self.tree.first().ok_or(Error::Empty)?;
        Ok(self.item_at(arena_index))
    }

    /// Removes and returns the root entry as `(key, value, payload)`.
    ///
    /// Fails with [`Error::Empty`] if the heap holds no entries.
    pub fn pop(&mut self) -> Result<(K, f64, V), Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(self.pop_root())
    }

    /// Removes the current root, restoring the heap property, and returns
    /// its key/value/payload. Assumes the heap is non-empty.
    fn pop_root(&mut self) -> (K, f64, V) {
        let root_index = self.tree[0];
        let last = self.tree.len() - 1;
        if last == 0 {
            self.tree.pop();
        } else {
            let last_index = self.tree[last];
            self.tree[0] = last_index;
            self.tree.pop();
            self.set_position(last_index, 0);
            self.sift_up(0);
        }
        let entry = self.arena.remove(root_index);
        self.index.remove(&entry.key);
        (entry.key, entry.value, entry.payload)
    }

    /// Borrows the entry currently registered under `key`, if any.
    pub fn get(&self, key: &K) -> Option<Item<'_, K, V>> {
        let arena_index = self.index.get(key)?;
        Some(self.item_at(arena_index))
    }

    /// Borrows the entry addressed by `handle`, if it is still live in this
    /// heap.
    pub fn get_by_handle(&self, handle: Handle<K, V>) -> Option<Item<'_, K, V>> {
        if handle.heap_id != self.id {
            return None;
        }
        let entry = self.arena.get_checked(handle.arena_index, handle.generation)?;
        Some(Item::new(entry, handle))
    }

    fn item_at(&self, arena_index: usize) -> Item<'_, K, V> {
        let entry = self
            .arena
            .get(arena_index)
            .expect("tree entries always address an occupied arena slot");
        let generation = self
            .arena
            .generation_of(arena_index)
            .expect("tree entries always address an occupied arena slot");
        Item::new(entry, self.make_handle(arena_index, generation))
    }

    /// Iterates all live entries in heap-array order (not priority order).
    pub fn iter_unordered(&self) -> impl Iterator<Item = Item<'_, K, V>> + '_ {
        self.tree.iter().map(move |&arena_index| self.item_at(arena_index))
    }

    /// Iterates all live entries in priority order without mutating the
    /// heap, by popping a clone.
    pub fn iter_ordered(&self) -> alloc::vec::IntoIter<(K, f64, V)>
    where
        V: Clone,
    {
        let mut scratch = self.clone();
        let mut out = Vec::with_capacity(scratch.len());
        while let Ok(popped) = scratch.pop() {
            out.push(popped);
        }
        out.into_iter()
    }

    /// Removes and yields every entry in priority order, leaving the heap
    /// empty.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain { queue: self }
    }

    fn resolve(&self, identifier: &Identifier<K, V>) -> Result<usize, Error> {
        match identifier {
            Identifier::Key(key) => self.index.get(key).ok_or(Error::UnknownKey),
            Identifier::Handle(handle) => {
                if handle.heap_id != self.id {
                    return Err(Error::StaleHandle);
                }
                match self.arena.generation_of(handle.arena_index) {
                    Some(generation) if generation == handle.generation => Ok(handle.arena_index),
                    _ => Err(Error::StaleHandle),
                }
            }
        }
    }

    fn make_handle(&self, arena_index: usize, generation: u64) -> Handle<K, V> {
        Handle::new(self.id, arena_index, generation)
    }

    fn set_position(&mut self, arena_index: usize, position: usize) {
        if let Some(entry) = self.arena.get_mut(arena_index) {
            entry.position = position;
        }
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        let lhs = self.arena.get(a).expect("arena index in tree must be occupied");
        let rhs = self.arena.get(b).expect("arena index in tree must be occupied");
        self.polarity
            .precedes(lhs.value, lhs.change_index, rhs.value, rhs.change_index)
    }

    /// Bubbles the entry at `pos` toward the root while it precedes its
    /// parent.
    fn sift_down(&mut self, pos: usize) {
        if pos == 0 {
            return;
        }
        let moving = self.tree[pos];
        let mut pos = pos;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            let parent_index = self.tree[parent];
            if !self.precedes(moving, parent_index) {
                break;
            }
            self.tree[pos] = parent_index;
            self.set_position(parent_index, pos);
            pos = parent;
        }
        self.tree[pos] = moving;
        self.set_position(moving, pos);
    }

    /// Bubbles the entry at `pos` toward the leaves by repeatedly pulling
    /// the smaller (or larger, under max polarity) child up, then restores
    /// the heap property from the resulting hole by sifting down.
    fn sift_up(&mut self, pos: usize) {
        let len = self.tree.len();
        let moving = self.tree[pos];
        let mut pos = pos;
        let mut child = 2 * pos + 1;
        while child < len {
            let right = child + 1;
            if right < len && !self.precedes(self.tree[child], self.tree[right]) {
                child = right;
            }
            let child_index = self.tree[child];
            self.tree[pos] = child_index;
            self.set_position(child_index, pos);
            pos = child;
            child = 2 * pos + 1;
        }
        self.tree[pos] = moving;
        self.set_position(moving, pos);
        self.sift_down(pos);
    }

    /// Restores the heap property around `pos` after its value changed,
    /// choosing the sift direction by comparing against the parent.
    fn restore(&mut self, pos: usize) {
        if pos == 0 {
            self.sift_up(pos);
            return;
        }
        let parent = (pos - 1) / 2;
        if self.precedes(self.tree[pos], self.tree[parent]) {
            self.sift_down(pos);
        } else {
            self.sift_up(pos);
        }
    }

    /// Checks every documented heap/index invariant. Not part of the stable
    /// API; exists so integration tests can cross-check internal state.
    #[doc(hidden)]
    pub fn verify_invariants(&self) -> bool {
        if self.tree.len() != self.index.len() {
            return false;
        }
        for (pos, &arena_index) in self.tree.iter().enumerate() {
            let entry = match self.arena.get(arena_index) {
                Some(entry) => entry,
                None => return false,
            };
            if entry.position != pos {
                return false;
            }
            match self.index.get(&entry.key) {
                Some(indexed) if indexed == arena_index => {}
                _ => return false,
            }
            if pos > 0 {
                let parent = (pos - 1) / 2;
                if self.precedes(arena_index, self.tree[parent]) {
                    return false;
                }
            }
        }
        true
    }

    /// The current priority values in heap-array order. Not part of the
    /// stable API; exists for property tests to inspect raw heap layout.
    #[doc(hidden)]
    pub fn export_values(&self) -> Vec<f64> {
        self.tree
            .iter()
            .map(|&arena_index| self.arena.get(arena_index).expect("live").value)
            .collect()
    }
}

impl<K, V> Default for KeyedPriorityQueue<K, V>
where
    K: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Draining iterator returned by [`KeyedPriorityQueue::drain`].
pub struct Drain<'a, K, V>
where
    K: Key,
{
    queue: &'a mut KeyedPriorityQueue<K, V>,
}

impl<'a, K, V> Iterator for Drain<'a, K, V>
where
    K: Key,
{
    type Item = (K, f64, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}
