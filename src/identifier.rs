use crate::handle::Handle;

/// A key or a handle, accepted by operations that can address an entry
/// either way (`change_value`, `delete`, ...).
///
/// Most callers will prefer the `_by_key`/`_by_handle` convenience wrappers
/// on [`KeyedPriorityQueue`](crate::KeyedPriorityQueue) over constructing
/// this directly.
pub enum Identifier<K, V> {
    /// Address the entry currently registered under this key.
    Key(K),
    /// Address the entry this handle was issued for.
    Handle(Handle<K, V>),
}
