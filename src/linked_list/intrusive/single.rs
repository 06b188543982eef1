use core::fmt;

use alloc::boxed::Box;

use mola_lists_derive::Node;

/// The owning pointer from a node to its successor.
pub type Next<N> = Option<Box<N>>;

/// A node in a singly linked list.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink<Self>,
    data: T,
}

impl<T: fmt::Debug> fmt::Debug for SingleNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleNode").field("data", &self.data).finish_non_exhaustive()
    }
}

/// A link in a singly linked list.
///
/// Owns the next node, so a chain of nodes is dropped together with its first
/// node unless it is detached beforehand.
pub struct SingleLink<N> {
    next: Next<N>,
}

impl<N> SingleLink<N> {
    pub const fn new() -> Self {
        Self { next: None }
    }

    #[inline]
    pub fn slot(&self) -> &Next<N> {
        &self.next
    }

    #[inline]
    pub fn slot_mut(&mut self) -> &mut Next<N> {
        &mut self.next
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.next.is_some()
    }
}

impl<N> Default for SingleLink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for SingleLink<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleLink").field("linked", &self.is_linked()).finish()
    }
}
