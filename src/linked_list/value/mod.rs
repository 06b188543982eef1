//! Non-intrusive lists: each node owns a separately allocated copy of its element.
//!
//! - [`list::ValueList`] stores any element type `T`.
//! - [`block::BlockList`] stores opaque byte blocks of one size fixed at
//!   construction and compares them byte for byte.
//!
//! Both always drain to empty; there is no pinned head here.

pub mod block;
pub mod list;
