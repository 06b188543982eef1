//! Singly linked lists.
//!
//! Both flavors are built on the same owning chain: every node is held by a
//! `Box` in its predecessor's link (the list itself holds the first one), so a
//! list forms a strict tree of ownership and tears down head to tail.
//!
//! # Examples
//!
//! ```
//! use mola_lists::IntrusiveList;
//!
//! let mut list = IntrusiveList::create(1).unwrap();
//! list.append(2).unwrap();
//! list.append(3).unwrap();
//! assert_eq!(list.to_string(), "(1) -> (2) -> (3) -> NULL");
//!
//! list.remove(&1);
//! assert_eq!(list.to_string(), "(2) -> (3) -> NULL");
//! ```
//!
//! ```
//! use mola_lists::ValueList;
//!
//! let mut list = ValueList::<i32>::new();
//! for v in [1, 2, 3] {
//!     list.append(v).unwrap();
//! }
//! assert_eq!(list.pop(), Some(3));
//! list.insert(0, 0).unwrap();
//! list.remove(&1);
//! assert_eq!(list.to_string(), "0 -> 2 -> NULL");
//! assert_eq!(list.index_of(&2), 1);
//! ```
pub mod intrusive;
pub mod value;

/// Returned by `index_of` when no element matches.
pub const NOT_FOUND: usize = usize::MAX;
