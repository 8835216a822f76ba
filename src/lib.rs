#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::missing_panics_doc,
    clippy::todo
)]
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

mod arena;
mod entry;
mod error;
mod handle;
mod heap;
mod identifier;
mod item;
mod key_index;
mod options;
mod polarity;

pub use crate::error::Error;
pub use crate::handle::Handle;
pub use crate::heap::{Drain, KeyedPriorityQueue};
pub use crate::identifier::Identifier;
pub use crate::item::Item;
pub use crate::key_index::Key;
pub use crate::options::Options;
pub use crate::polarity::Polarity;
