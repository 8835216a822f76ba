/// Errors that can be returned by a [`KeyedPriorityQueue`](crate::KeyedPriorityQueue) operation.
///
/// Every fallible operation validates all of its preconditions before
/// mutating the heap, so a returned error always means the heap is exactly
/// as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `add` (or the new-key path of `add_or_change_value`, or bulk
    /// construction) was called with a key that is already present.
    DuplicateKey,
    /// `change_value`, `delete` or a strict key lookup was called with a
    /// key that is not present.
    UnknownKey,
    /// A handle does not belong to this heap, is the default (empty)
    /// handle, or addresses an entry that has already been removed.
    StaleHandle,
    /// `peek` or `pop` was called on a heap with no entries.
    Empty,
    /// A value of `NaN` was supplied; priorities must be totally ordered.
    InvalidValue,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message = match self {
            Error::DuplicateKey => "key is already present in the queue",
            Error::UnknownKey => "key is not present in the queue",
            Error::StaleHandle => "handle does not address a live entry in this queue",
            Error::Empty => "queue is empty",
            Error::InvalidValue => "value must not be NaN",
        };
        f.write_str(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
