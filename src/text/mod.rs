//! Zero-copy text slices
//!
//! Bounds-safe, non-owning views over a backing byte buffer. Word lists are
//! tokenized into slices without copying a single byte; every view borrows
//! the buffer it came from, so no slice can outlive the data it points into.

mod slice;
mod split;

pub use slice::TextSlice;
pub use split::SplitCollapsing;
