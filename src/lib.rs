//! Singly linked lists with owning links.
//!
//! Two flavors live under [`linked_list`]:
//!
//! - [`linked_list::intrusive`]: the link is embedded in the node type itself.
//!   Any struct with a `link` and a `data` field can become a node through
//!   `#[derive(Node)]`.
//! - [`linked_list::value`]: nodes own a separately allocated copy of each
//!   element, either typed ([`ValueList`]) or as fixed-size byte blocks
//!   ([`BlockList`]).
//!
//! Every allocating operation reports allocator failure through
//! [`heap::AllocError`] and leaves the list untouched when it does.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod heap;
pub mod linked_list;

#[cfg(test)]
mod testing;

pub use linked_list::intrusive::{IntrusiveList, policy::HeadPolicy};
pub use linked_list::value::{block::BlockList, list::ValueList};
pub use linked_list::NOT_FOUND;

pub use mola_lists_derive::Node;
