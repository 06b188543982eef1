use core::fmt;

use alloc::boxed::Box;

use mola_lists_derive::Node;

use crate::heap::{try_box, AllocError};
use crate::linked_list::intrusive::{
    iter,
    list::LinkedList,
    policy::HeadPolicy,
    single::SingleLink,
    traits::NodeWithData,
};

/// A node pointing at a separately allocated element.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct ValueNode<T> {
    link: SingleLink<Self>,
    data: Box<T>,
}

/// A singly linked list owning a heap copy of each element.
pub struct ValueList<T> {
    nodes: LinkedList<ValueNode<T>>,
}

impl<T> ValueList<T> {
    pub const fn new() -> Self {
        Self {
            nodes: LinkedList::with_policy(HeadPolicy::Detachable),
        }
    }

    /// Size in bytes of every element block.
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn first(&self) -> Option<&T> {
        self.nodes.first().map(|data| &**data)
    }

    pub fn last(&self) -> Option<&T> {
        self.nodes.last().map(|data| &**data)
    }

    /// Adds `value` at the tail.
    pub fn append(&mut self, value: T) -> Result<(), AllocError> {
        self.insert(self.len(), value)
    }

    /// Inserts `value` at `index`; indices past the end insert at the tail.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), AllocError> {
        let block = try_box(value)?;
        self.nodes.insert(index, block)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.nodes.pop_node().map(|node| *(*node).into_data())
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.nodes.remove_node(value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.nodes.contains(value)
    }

    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.nodes.position(value)
    }

    /// Index of the first element equal to `value`, or [`NOT_FOUND`].
    ///
    /// [`NOT_FOUND`]: crate::NOT_FOUND
    pub fn index_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.nodes.index_of(value)
    }

    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.nodes.count(value)
    }

    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Frees every element and node. Equivalent to dropping the list.
    pub fn destroy(self) {
        drop(self);
    }

    /// Copies every element of `other` onto the tail, all or nothing.
    pub fn extend_from(&mut self, other: &Self) -> Result<(), AllocError>
    where
        T: Clone,
    {
        let copy = other.try_clone()?;
        self.nodes.append_list(copy.nodes);
        Ok(())
    }

    pub fn try_clone(&self) -> Result<Self, AllocError>
    where
        T: Clone,
    {
        let mut copy = Self::new();
        for value in self.iter() {
            copy.append(value.clone())?;
        }
        Ok(copy)
    }

    /// Writes the list as `v1 -> v2 -> ... -> NULL`.
    pub fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        write!(out, "{self}")
    }

    /// Writes the list as `v1 -> v2 -> ... -> NULL` to an I/O stream.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()>
    where
        T: fmt::Display,
    {
        write!(out, "{self}")
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.nodes.iter_mut(),
        }
    }
}

impl ValueList<i32> {
    /// Writes a list of integers as `v1 -> v2 -> ... -> NULL`.
    pub fn print_int<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.print(out)
    }
}

impl<T> Default for ValueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ValueList<T> {
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| alloc::alloc::handle_alloc_error(err.layout()))
    }
}

impl<T: PartialEq> PartialEq for ValueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<T: Eq> Eq for ValueList<T> {}

impl<T: fmt::Debug> fmt::Debug for ValueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ValueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value} -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<T> Extend<T> for ValueList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(Box::new));
    }
}

impl<T> FromIterator<T> for ValueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// An iterator over the elements of a [`ValueList`].
pub struct Iter<'a, T> {
    inner: iter::Iter<'a, ValueNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|data| &**data)
    }
}

/// A mutable iterator over the elements of a [`ValueList`].
pub struct IterMut<'a, T> {
    inner: iter::IterMut<'a, ValueNode<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|data| &mut **data)
    }
}

/// An owning iterator over the elements of a [`ValueList`], head first.
pub struct IntoIter<T> {
    inner: iter::IntoIter<ValueNode<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|data| *data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> IntoIterator for ValueList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.nodes.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ValueList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
