extern crate std;

use std::{boxed::Box, panic, vec::Vec};

use crate::linked_list::intrusive::{
    single::SingleNode,
    traits::{Link, NodeWithData},
    IntrusiveList,
};
use crate::testing;

#[test]
fn test_destroy_frees_every_node() {
    let ((), leaked) = testing::measure(|| {
        let mut list = IntrusiveList::create(0).unwrap();
        for i in 1..64 {
            list.append(i).unwrap();
        }
        list.remove(&10);
        list.insert(0, -1).unwrap();
        assert_eq!(list.pop_last(), Some(63));
        list.destroy();
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_drop_long_chain_without_recursion() {
    let ((), leaked) = testing::measure(|| {
        let list: IntrusiveList = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_failed_append_leaves_list_untouched() {
    let mut list = IntrusiveList::create(1).unwrap();
    list.append(2).unwrap();

    testing::fail_nth_alloc(0);
    let result = list.append(3);
    testing::reset_failures();

    assert!(result.is_err());
    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2]);
}

#[test]
fn test_failed_insert_and_create() {
    testing::fail_nth_alloc(0);
    assert!(IntrusiveList::create(1).is_err());
    testing::reset_failures();

    let mut list = IntrusiveList::create(1).unwrap();
    testing::fail_nth_alloc(0);
    assert!(list.insert(0, 0).is_err());
    testing::reset_failures();
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_failed_extend_from_is_all_or_nothing() {
    let mut list: IntrusiveList = (0..3).collect();
    let other: IntrusiveList = (10..15).collect();

    let (result, leaked) = testing::measure(|| {
        testing::fail_nth_alloc(3);
        let result = list.extend_from(&other);
        testing::reset_failures();
        result
    });

    assert!(result.is_err());
    assert_eq!(leaked, 0);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);

    list.extend_from(&other).unwrap();
    assert_eq!(list.len(), 8);
}

/// A free node dragging `len - 1` successors behind it.
fn detached_chain(len: i32) -> Box<SingleNode<i32>> {
    let mut head = Box::new(SingleNode::new(0));
    for v in (1..len).rev() {
        let mut node = Box::new(SingleNode::new(v));
        node.set_next(head.take_next());
        head.set_next(Some(node));
    }
    head
}

#[test]
fn test_insert_node_frees_long_dangling_chain() {
    let ((), leaked) = testing::measure(|| {
        let mut list: IntrusiveList = (10..13).collect();
        list.insert_node(1, detached_chain(200_000));
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 0, 11, 12]);
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_into_data_frees_long_chain() {
    let (data, leaked) = testing::measure(|| detached_chain(200_000).into_data());
    assert_eq!(data, 0);
    assert_eq!(leaked, 0);
}

#[test]
fn test_extend_keeps_count_when_iterator_panics() {
    let mut list = IntrusiveList::create(1).unwrap();

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        list.extend((2..).map(|v| {
            assert!(v < 4, "source exhausted");
            v
        }));
    }));
    assert!(result.is_err());

    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    list.append(99).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 99]);
}
