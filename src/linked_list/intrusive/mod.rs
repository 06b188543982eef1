//! # Intrusive Linked List
//!
//! The link lives inside the node type. A node is any struct with two named
//! fields, `link: SingleLink<Self>` and `data: T`, with `#[derive(Node)]` on it:
//!
//! ```
//! use mola_lists::Node;
//! use mola_lists::linked_list::intrusive::{list::LinkedList, single::SingleLink};
//!
//! #[derive(Node)]
//! struct Job {
//!     link: SingleLink<Self>,
//!     data: (u32, &'static str),
//! }
//!
//! let mut jobs = LinkedList::<Job>::new();
//! jobs.append((1, "fetch")).unwrap();
//! jobs.append((2, "build")).unwrap();
//! assert_eq!(jobs.index_of(&(2, "build")), 1);
//! ```
//!
//! ## Core Components
//!
//! - [`traits`]: `Link` and `NodeWithData`, which the derive implements.
//! - [`single::SingleLink`]: the owning link embedded in every node.
//! - [`list::LinkedList`]: the list handle and all list operations.
//! - [`policy`]: how a one-element list treats removal of its head.

pub mod iter;
pub mod list;
pub mod policy;
pub mod single;
pub mod traits;

#[cfg(test)]
mod tests;

/// The classic intrusive list of `i32` payloads.
pub type IntrusiveList = list::LinkedList<single::SingleNode<i32>>;
