use core::borrow::Borrow;
use core::fmt;

use alloc::boxed::Box;

use crate::heap::{try_box, AllocError};
use crate::linked_list::NOT_FOUND;

use super::iter::{IntoIter, Iter, IterMut};
use super::policy::HeadPolicy;
use super::traits::NodeWithData;

/// A singly linked list of intrusive nodes.
///
/// The handle owns the first node and every node owns its successor. An empty
/// list plays the role of a null handle: it prints as `NULL` and has length 0.
pub struct LinkedList<N: NodeWithData> {
    head: Option<Box<N>>,
    count: usize,
    policy: HeadPolicy,
}

impl<N> LinkedList<N>
where
    N: NodeWithData,
{
    /// Creates a new, empty linked list with the default [`HeadPolicy`].
    pub const fn new() -> Self {
        Self::with_policy(HeadPolicy::Pinned)
    }

    /// Creates a new, empty linked list with the given head policy.
    pub const fn with_policy(policy: HeadPolicy) -> Self {
        LinkedList {
            head: None,
            count: 0,
            policy,
        }
    }

    /// Creates a list holding a single node with `data`.
    pub fn create(data: N::Data) -> Result<Self, AllocError> {
        let mut list = Self::new();
        list.append(data)?;
        Ok(list)
    }

    pub fn policy(&self) -> HeadPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: HeadPolicy) {
        self.policy = policy;
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes, the head included.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn first(&self) -> Option<&N::Data> {
        self.head.as_deref().map(N::data)
    }

    pub fn last(&self) -> Option<&N::Data> {
        self.iter().last()
    }

    /// Get the first node of the chain.
    pub fn head(&self) -> Option<&N> {
        self.head.as_deref()
    }

    /// Adds `data` at the tail.
    pub fn append(&mut self, data: N::Data) -> Result<(), AllocError> {
        self.insert(self.count, data)
    }

    /// Inserts `data` so that it ends up at `index`.
    ///
    /// Indices past the end insert at the tail.
    pub fn insert(&mut self, index: usize, data: N::Data) -> Result<(), AllocError> {
        let node = try_box(N::new(data))?;
        self.link_at(index, node);
        Ok(())
    }

    /// Links an already allocated node at `index`, clamped to the tail.
    pub fn insert_node(&mut self, index: usize, node: Box<N>) {
        self.link_at(index, node);
    }

    fn link_at(&mut self, index: usize, mut node: Box<N>) {
        let slot = self.slot_at(index);
        // A node handed in from elsewhere may still drag a chain behind it.
        Self::free_chain(node.set_next(slot.take()));
        *slot = Some(node);
        self.count += 1;
    }

    /// Moves every node of `other` onto the tail of `self`.
    pub fn append_list(&mut self, mut other: Self) {
        let tail = self.slot_at(self.count);
        *tail = other.head.take();
        self.count += core::mem::take(&mut other.count);
    }

    /// Copies every element of `other` onto the tail.
    ///
    /// Either all of `other` is appended or, on allocation failure, nothing is.
    pub fn extend_from(&mut self, other: &Self) -> Result<(), AllocError>
    where
        N::Data: Clone,
    {
        let copy = other.try_clone()?;
        self.append_list(copy);
        Ok(())
    }

    pub fn contains<Q>(&self, data: &Q) -> bool
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(data).is_some()
    }

    /// Index of the first node holding `data`, the head being index 0.
    pub fn position<Q>(&self, data: &Q) -> Option<usize>
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter().position(|d| d.borrow() == data)
    }

    /// Like [`position`](Self::position), with [`NOT_FOUND`] for a miss.
    pub fn index_of<Q>(&self, data: &Q) -> usize
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(data).unwrap_or(NOT_FOUND)
    }

    pub fn count<Q>(&self, data: &Q) -> usize
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.iter().filter(|d| (*d).borrow() == data).count()
    }

    /// Removes the last element and returns its data.
    ///
    /// Under [`HeadPolicy::Pinned`] a one-element list keeps its head and a copy
    /// of the head's data is returned instead.
    pub fn pop_last(&mut self) -> Option<N::Data>
    where
        N::Data: Clone,
    {
        if self.count == 1 && self.policy == HeadPolicy::Pinned {
            return self.first().cloned();
        }
        self.pop_node().map(|node| (*node).into_data())
    }

    /// Unlinks the tail node regardless of policy.
    pub fn pop_node(&mut self) -> Option<Box<N>> {
        let last = self.count.checked_sub(1)?;
        self.unlink_at(last)
    }

    /// Unlinks the head node regardless of policy.
    pub fn pop_front_node(&mut self) -> Option<Box<N>> {
        self.unlink_at(0)
    }

    /// Removes the first node holding `data`. Returns whether a node was removed.
    ///
    /// Under [`HeadPolicy::Pinned`] the head of a one-element list is left in
    /// place and `false` is returned.
    pub fn remove<Q>(&mut self, data: &Q) -> bool
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if self.count == 1 && self.policy == HeadPolicy::Pinned {
            return false;
        }
        self.remove_node(data).is_some()
    }

    /// Unlinks the first node holding `data` regardless of policy.
    pub fn remove_node<Q>(&mut self, data: &Q) -> Option<Box<N>>
    where
        N::Data: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(data)?;
        self.unlink_at(index)
    }

    fn unlink_at(&mut self, index: usize) -> Option<Box<N>> {
        if index >= self.count {
            return None;
        }
        let slot = self.slot_at(index);
        let mut node = slot.take()?;
        *slot = node.take_next();
        self.count -= 1;
        Some(node)
    }

    /// The link slot that owns the node at `index`, or the empty slot after the
    /// tail when `index >= len`.
    fn slot_at(&mut self, index: usize) -> &mut Option<Box<N>> {
        Self::walk(&mut self.head, index.min(self.count))
    }

    fn walk(mut slot: &mut Option<Box<N>>, steps: usize) -> &mut Option<Box<N>> {
        for _ in 0..steps {
            match slot {
                Some(node) => slot = node.next_slot_mut(),
                None => unreachable!("count covers every linked node"),
            }
        }
        slot
    }

    /// Frees a detached chain one node at a time.
    fn free_chain(mut current: Option<Box<N>>) {
        while let Some(mut node) = current {
            current = node.take_next();
        }
    }

    /// Reverses the list in place by relinking.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.set_next(reversed);
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Frees every node, head to tail.
    pub fn clear(&mut self) {
        Self::free_chain(self.head.take());
        self.count = 0;
    }

    /// Tears the list down. Equivalent to dropping it.
    pub fn destroy(self) {
        drop(self);
    }

    /// Deep copy that reports allocation failure.
    pub fn try_clone(&self) -> Result<Self, AllocError>
    where
        N::Data: Clone,
    {
        let mut copy = Self::with_policy(self.policy);
        let mut tail = &mut copy.head;
        for data in self.iter() {
            let node = try_box(N::new(data.clone()))?;
            tail = tail.insert(node).next_slot_mut();
            copy.count += 1;
        }
        Ok(copy)
    }

    /// Writes the list as `(v1) -> (v2) -> ... -> NULL`.
    pub fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        N::Data: fmt::Display,
    {
        write!(out, "{self}")
    }

    /// Writes the list as `(v1) -> (v2) -> ... -> NULL` to an I/O stream.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()>
    where
        N::Data: fmt::Display,
    {
        write!(out, "{self}")
    }

    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self.head.as_deref())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, N> {
        IterMut::new(self.head.as_deref_mut())
    }
}

impl<N: NodeWithData> Drop for LinkedList<N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<N: NodeWithData> Default for LinkedList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for LinkedList<N>
where
    N: NodeWithData,
    N::Data: Clone,
{
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| alloc::alloc::handle_alloc_error(err.layout()))
    }
}

impl<N> PartialEq for LinkedList<N>
where
    N: NodeWithData,
    N::Data: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<N> Eq for LinkedList<N>
where
    N: NodeWithData,
    N::Data: Eq,
{
}

impl<N> fmt::Debug for LinkedList<N>
where
    N: NodeWithData,
    N::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<N> fmt::Display for LinkedList<N>
where
    N: NodeWithData,
    N::Data: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for data in self.iter() {
            write!(f, "({data}) -> ")?;
        }
        f.write_str("NULL")
    }
}

impl<N: NodeWithData> Extend<N::Data> for LinkedList<N> {
    fn extend<I: IntoIterator<Item = N::Data>>(&mut self, iter: I) {
        // `count` must track the chain even if `iter` unwinds midway.
        let mut tail = Self::walk(&mut self.head, self.count);
        for data in iter {
            let node = try_box(N::new(data))
                .unwrap_or_else(|err| alloc::alloc::handle_alloc_error(err.layout()));
            tail = tail.insert(node).next_slot_mut();
            self.count += 1;
        }
    }
}

impl<N: NodeWithData> FromIterator<N::Data> for LinkedList<N> {
    fn from_iter<I: IntoIterator<Item = N::Data>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<N: NodeWithData> IntoIterator for LinkedList<N> {
    type Item = N::Data;
    type IntoIter = IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, N: NodeWithData> IntoIterator for &'a LinkedList<N> {
    type Item = &'a N::Data;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: NodeWithData> IntoIterator for &'a mut LinkedList<N> {
    type Item = &'a mut N::Data;
    type IntoIter = IterMut<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
