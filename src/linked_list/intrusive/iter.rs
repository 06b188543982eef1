use super::list::LinkedList;
use super::traits::NodeWithData;

/// An iterator over the data of a linked list.
pub struct Iter<'a, N: NodeWithData> {
    current: Option<&'a N>,
}

impl<'a, N: NodeWithData> Iter<'a, N> {
    pub(super) fn new(head: Option<&'a N>) -> Self {
        Self { current: head }
    }
}

impl<'a, N: NodeWithData> Iterator for Iter<'a, N> {
    type Item = &'a N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            node.data()
        })
    }
}

impl<N: NodeWithData> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// A mutable iterator over the data of a linked list.
pub struct IterMut<'a, N: NodeWithData> {
    current: Option<&'a mut N>,
}

impl<'a, N: NodeWithData> IterMut<'a, N> {
    pub(super) fn new(head: Option<&'a mut N>) -> Self {
        Self { current: head }
    }
}

impl<'a, N: NodeWithData> Iterator for IterMut<'a, N> {
    type Item = &'a mut N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            let (data, next) = node.split_mut();
            self.current = next;
            data
        })
    }
}

/// An owning iterator, yielding data head first.
pub struct IntoIter<N: NodeWithData> {
    list: LinkedList<N>,
}

impl<N: NodeWithData> IntoIter<N> {
    pub(super) fn new(list: LinkedList<N>) -> Self {
        Self { list }
    }
}

impl<N: NodeWithData> Iterator for IntoIter<N> {
    type Item = N::Data;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front_node().map(|node| (*node).into_data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<N: NodeWithData> ExactSizeIterator for IntoIter<N> {}
