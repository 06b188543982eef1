use alloc::boxed::Box;

/// A trait for a node that owns the rest of the chain through its link.
pub trait Link: Sized {
    /// Get the owning pointer to the next node
    fn next_slot(&self) -> &Option<Box<Self>>;

    /// Get the owning pointer to the next node mutably
    fn next_slot_mut(&mut self) -> &mut Option<Box<Self>>;

    /// Get the next node in the linked list
    #[inline]
    fn next(&self) -> Option<&Self> {
        self.next_slot().as_deref()
    }

    /// Get the next node in the linked list mutably
    #[inline]
    fn next_mut(&mut self) -> Option<&mut Self> {
        self.next_slot_mut().as_deref_mut()
    }

    /// Detach everything after this node and hand it back
    #[inline]
    fn take_next(&mut self) -> Option<Box<Self>> {
        self.next_slot_mut().take()
    }

    /// Replace the rest of the chain, returning the old one
    #[inline]
    fn set_next(&mut self, next: Option<Box<Self>>) -> Option<Box<Self>> {
        core::mem::replace(self.next_slot_mut(), next)
    }
}

/// A trait for a node that carries data.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Build an unlinked node around `data`
    fn new(data: Self::Data) -> Self;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Borrow the data and the next node at the same time
    fn split_mut(&mut self) -> (&mut Self::Data, Option<&mut Self>);

    /// Consume the node, keeping its data.
    ///
    /// The node should already be unlinked; any chain still attached is dropped
    /// along with it.
    fn into_data(self) -> Self::Data;
}
