//! What happens to the head of a one-element list.
//!
//! The classic intrusive list stores its first element inside the list handle,
//! so it can never give that element back: popping returns a copy and removing
//! it does nothing. [`HeadPolicy::Pinned`] keeps that behavior.
//! [`HeadPolicy::Detachable`] lets the list drain to empty like [`ValueList`].
//!
//! [`ValueList`]: crate::ValueList

use crate::heap::AllocError;

use super::list::LinkedList;
use super::traits::NodeWithData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadPolicy {
    /// A lone head survives `pop_last` and `remove`.
    #[default]
    Pinned,
    /// The head is removed like any other node.
    Detachable,
}

/// Builder for [`LinkedList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBuilder {
    policy: HeadPolicy,
}

impl ListBuilder {
    /// Create a new builder with default settings.
    pub const fn new() -> Self {
        Self {
            policy: HeadPolicy::Pinned,
        }
    }

    /// Set the head policy.
    pub const fn policy(mut self, policy: HeadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build an empty list.
    pub fn build<N: NodeWithData>(self) -> LinkedList<N> {
        LinkedList::with_policy(self.policy)
    }

    /// Build a list holding `data` as its only element.
    pub fn create<N: NodeWithData>(self, data: N::Data) -> Result<LinkedList<N>, AllocError> {
        let mut list = self.build();
        list.append(data)?;
        Ok(list)
    }
}
