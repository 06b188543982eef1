use core::fmt;

use alloc::boxed::Box;

use mola_lists_derive::Node;

use crate::heap::{try_copy_bytes, AllocError};
use crate::linked_list::intrusive::{
    iter,
    list::LinkedList,
    policy::HeadPolicy,
    single::SingleLink,
    traits::NodeWithData,
};

/// A node owning one fixed-size byte block.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct BlockNode {
    link: SingleLink<Self>,
    data: Box<[u8]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    /// The caller's buffer does not have the list's element size.
    SizeMismatch { expected: usize, found: usize },
    /// Blocks cannot be read as `i32` values.
    NotInt32 { element_size: usize },
    Alloc(AllocError),
    /// The output sink refused a write.
    Write,
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::SizeMismatch { expected, found } => {
                write!(f, "block of {found} bytes in a list of {expected}-byte elements")
            }
            BlockError::NotInt32 { element_size } => {
                write!(f, "{element_size}-byte elements cannot be printed as i32")
            }
            BlockError::Alloc(err) => fmt::Display::fmt(err, f),
            BlockError::Write => f.write_str("failed to write list"),
        }
    }
}

impl core::error::Error for BlockError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            BlockError::Alloc(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocError> for BlockError {
    fn from(err: AllocError) -> Self {
        BlockError::Alloc(err)
    }
}

impl From<fmt::Error> for BlockError {
    fn from(_: fmt::Error) -> Self {
        BlockError::Write
    }
}

/// A singly linked list of opaque byte blocks, all `element_size` bytes long.
///
/// Elements are copied in on insertion and compared byte for byte.
pub struct BlockList {
    nodes: LinkedList<BlockNode>,
    element_size: usize,
}

impl BlockList {
    pub const fn new(element_size: usize) -> Self {
        Self {
            nodes: LinkedList::with_policy(HeadPolicy::Detachable),
            element_size,
        }
    }

    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn first(&self) -> Option<&[u8]> {
        self.nodes.first().map(|block| &**block)
    }

    pub fn last(&self) -> Option<&[u8]> {
        self.nodes.last().map(|block| &**block)
    }

    fn check_size(&self, bytes: &[u8]) -> Result<(), BlockError> {
        if bytes.len() != self.element_size {
            return Err(BlockError::SizeMismatch {
                expected: self.element_size,
                found: bytes.len(),
            });
        }
        Ok(())
    }

    /// Copies `bytes` onto the tail.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), BlockError> {
        self.insert(self.len(), bytes)
    }

    /// Copies `bytes` in at `index`; indices past the end insert at the tail.
    pub fn insert(&mut self, index: usize, bytes: &[u8]) -> Result<(), BlockError> {
        self.check_size(bytes)?;
        let block = try_copy_bytes(bytes)?;
        self.nodes.insert(index, block)?;
        Ok(())
    }

    /// Removes the last block and hands it to the caller.
    pub fn pop(&mut self) -> Option<Box<[u8]>> {
        self.nodes.pop_node().map(|node| (*node).into_data())
    }

    /// Removes the first block equal to `bytes`. Returns whether one was found.
    pub fn remove(&mut self, bytes: &[u8]) -> bool {
        self.nodes.remove_node(bytes).is_some()
    }

    /// Blocks of the wrong size never match.
    pub fn contains(&self, bytes: &[u8]) -> bool {
        self.nodes.contains(bytes)
    }

    pub fn position(&self, bytes: &[u8]) -> Option<usize> {
        self.nodes.position(bytes)
    }

    /// Index of the first block equal to `bytes`, or [`NOT_FOUND`].
    ///
    /// [`NOT_FOUND`]: crate::NOT_FOUND
    pub fn index_of(&self, bytes: &[u8]) -> usize {
        self.nodes.index_of(bytes)
    }

    pub fn count(&self, bytes: &[u8]) -> usize {
        self.nodes.count(bytes)
    }

    pub fn reverse(&mut self) {
        self.nodes.reverse();
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Frees every block and node. Equivalent to dropping the list.
    pub fn destroy(self) {
        drop(self);
    }

    /// Copies every block of `other` onto the tail, all or nothing.
    pub fn extend_from(&mut self, other: &Self) -> Result<(), BlockError> {
        if other.element_size != self.element_size {
            return Err(BlockError::SizeMismatch {
                expected: self.element_size,
                found: other.element_size,
            });
        }
        let copy = other.try_clone()?;
        self.nodes.append_list(copy.nodes);
        Ok(())
    }

    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut copy = Self::new(self.element_size);
        for block in self.iter() {
            let block = try_copy_bytes(block)?;
            copy.nodes.append(block)?;
        }
        Ok(copy)
    }

    pub fn iter(&self) -> Blocks<'_> {
        Blocks {
            inner: self.nodes.iter(),
        }
    }

    /// Blocks can be rewritten in place but never resized.
    pub fn iter_mut(&mut self) -> BlocksMut<'_> {
        BlocksMut {
            inner: self.nodes.iter_mut(),
        }
    }

    /// Reads every block as a native-endian `i32`.
    pub fn ints(&self) -> Result<impl Iterator<Item = i32> + '_, BlockError> {
        if self.element_size != size_of::<i32>() {
            return Err(BlockError::NotInt32 {
                element_size: self.element_size,
            });
        }
        Ok(self.iter().map(|block| {
            let mut raw = [0; size_of::<i32>()];
            raw.copy_from_slice(block);
            i32::from_ne_bytes(raw)
        }))
    }

    /// Writes the blocks as integers, `v1 -> v2 -> ... -> NULL`.
    pub fn print_int<W: fmt::Write>(&self, out: &mut W) -> Result<(), BlockError> {
        for value in self.ints()? {
            write!(out, "{value} -> ")?;
        }
        out.write_str("NULL")?;
        Ok(())
    }
}

impl Clone for BlockList {
    fn clone(&self) -> Self {
        self.try_clone()
            .unwrap_or_else(|err| alloc::alloc::handle_alloc_error(err.layout()))
    }
}

impl PartialEq for BlockList {
    fn eq(&self, other: &Self) -> bool {
        self.element_size == other.element_size && self.nodes == other.nodes
    }
}

impl Eq for BlockList {}

impl fmt::Debug for BlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockList")
            .field("element_size", &self.element_size)
            .field("blocks", &self.nodes)
            .finish()
    }
}

/// An iterator over the blocks of a [`BlockList`].
pub struct Blocks<'a> {
    inner: iter::Iter<'a, BlockNode>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|block| &**block)
    }
}

/// A mutable iterator over the blocks of a [`BlockList`].
pub struct BlocksMut<'a> {
    inner: iter::IterMut<'a, BlockNode>,
}

impl<'a> Iterator for BlocksMut<'a> {
    type Item = &'a mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|block| &mut **block)
    }
}

/// An owning iterator over the blocks of a [`BlockList`], head first.
pub struct IntoBlocks {
    inner: iter::IntoIter<BlockNode>,
}

impl Iterator for IntoBlocks {
    type Item = Box<[u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl IntoIterator for BlockList {
    type Item = Box<[u8]>;
    type IntoIter = IntoBlocks;

    fn into_iter(self) -> Self::IntoIter {
        IntoBlocks {
            inner: self.nodes.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a [u8];
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
