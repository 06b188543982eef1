extern crate std;

use std::{format, string::String, vec, vec::Vec};

use crate::linked_list::intrusive::{
    list::LinkedList,
    single::{SingleLink, SingleNode},
    traits::{Link, NodeWithData},
    IntrusiveList,
};
use crate::NOT_FOUND;
use crate::Node;

fn list_of(values: &[i32]) -> IntrusiveList {
    let mut list = IntrusiveList::new();
    for &v in values {
        list.append(v).unwrap();
    }
    list
}

fn values(list: &IntrusiveList) -> Vec<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_single_list_create_append_print() {
    let mut list = IntrusiveList::create(1).unwrap();
    list.append(2).unwrap();
    list.append(3).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3) -> NULL");

    assert!(list.remove(&1));
    assert_eq!(format!("{list}"), "(2) -> (3) -> NULL");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_single_list_empty_handle() {
    let list = IntrusiveList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(!list.contains(&0));
    assert_eq!(list.index_of(&0), NOT_FOUND);
    assert_eq!(format!("{list}"), "NULL");
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
}

#[test]
fn test_single_list_print_into_sinks() {
    let list = list_of(&[4, -5]);

    let mut out = String::new();
    list.print(&mut out).unwrap();
    assert_eq!(out, "(4) -> (-5) -> NULL");
}

#[cfg(feature = "std")]
#[test]
fn test_single_list_write_to_io() {
    let mut bytes = Vec::new();
    list_of(&[4, -5]).write_to(&mut bytes).unwrap();
    assert_eq!(bytes, b"(4) -> (-5) -> NULL");

    let mut empty = Vec::new();
    IntrusiveList::new().write_to(&mut empty).unwrap();
    assert_eq!(empty, b"NULL");
}

#[test]
fn test_single_list_contains_and_index() {
    let list = list_of(&[7, 8, 9, 8]);

    assert!(list.contains(&7));
    assert!(list.contains(&9));
    assert!(!list.contains(&10));

    assert_eq!(list.index_of(&7), 0);
    assert_eq!(list.index_of(&8), 1);
    assert_eq!(list.index_of(&9), 2);
    assert_eq!(list.index_of(&10), NOT_FOUND);
    assert_eq!(list.position(&10), None);
    assert_eq!(list.count(&8), 2);
}

#[test]
fn test_single_list_insert_positions() {
    let mut list = list_of(&[1, 2, 3]);

    list.insert(0, 0).unwrap();
    assert_eq!(list.index_of(&0), 0);
    assert_eq!(values(&list), vec![0, 1, 2, 3]);

    list.insert(2, 15).unwrap();
    assert_eq!(values(&list), vec![0, 1, 15, 2, 3]);

    list.insert(5, 4).unwrap();
    assert_eq!(list.last(), Some(&4));

    // Past the end clamps to the tail.
    list.insert(100, 5).unwrap();
    assert_eq!(values(&list), vec![0, 1, 15, 2, 3, 4, 5]);
    assert_eq!(list.len(), 7);
}

#[test]
fn test_single_list_insert_into_empty() {
    let mut list = IntrusiveList::new();
    list.insert(3, 42).unwrap();
    assert_eq!(values(&list), vec![42]);
}

#[test]
fn test_single_list_remove() {
    let mut list = list_of(&[1, 2, 3, 2]);

    // Remove middle, first occurrence only
    assert!(list.remove(&2));
    assert_eq!(values(&list), vec![1, 3, 2]);
    assert!(list.contains(&2));

    // Remove tail
    assert!(list.remove(&2));
    assert_eq!(values(&list), vec![1, 3]);
    assert!(!list.contains(&2));

    // Missing value
    assert!(!list.remove(&42));
    assert_eq!(list.len(), 2);

    // Remove head
    assert!(list.remove(&1));
    assert_eq!(list.first(), Some(&3));
}

#[test]
fn test_single_list_pop_last() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.pop_last(), Some(3));
    assert_eq!(list.len(), 2);
    assert_eq!(list.pop_last(), Some(2));
    assert_eq!(list.len(), 1);

    let mut empty = IntrusiveList::new();
    assert_eq!(empty.pop_last(), None);
}

#[test]
fn test_single_list_node_level_ops() {
    let mut list = list_of(&[1, 2, 3]);

    let node = list.remove_node(&2).unwrap();
    assert_eq!(*node.data(), 2);
    assert!(node.next().is_none());

    list.insert_node(0, node);
    assert_eq!(values(&list), vec![2, 1, 3]);

    let front = list.pop_front_node().unwrap();
    assert_eq!((*front).into_data(), 2);
    let back = list.pop_node().unwrap();
    assert_eq!((*back).into_data(), 3);
    assert_eq!(values(&list), vec![1]);
}

#[test]
fn test_single_list_head_links() {
    let list = list_of(&[10, 20]);
    let head = list.head().unwrap();
    assert_eq!(*head.data(), 10);
    let second = head.next().unwrap();
    assert_eq!(*second.data(), 20);
    assert!(second.next().is_none());
}

#[test]
fn test_single_list_reverse_and_iter_mut() {
    let mut list = list_of(&[1, 2, 3, 4]);
    list.reverse();
    assert_eq!(values(&list), vec![4, 3, 2, 1]);

    for v in list.iter_mut() {
        *v *= 10;
    }
    assert_eq!(values(&list), vec![40, 30, 20, 10]);

    let mut single = list_of(&[5]);
    single.reverse();
    assert_eq!(values(&single), vec![5]);
}

#[test]
fn test_single_list_clone_eq_extend() {
    let list = list_of(&[1, 2]);
    let mut copy = list.clone();
    assert_eq!(copy, list);

    copy.extend_from(&list).unwrap();
    assert_eq!(values(&copy), vec![1, 2, 1, 2]);
    assert_ne!(copy, list);

    copy.extend([3, 4]);
    assert_eq!(copy.len(), 6);
    assert_eq!(copy.last(), Some(&4));

    let collected: IntrusiveList = (1..=3).collect();
    assert_eq!(collected.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_single_list_clear_and_reuse() {
    let mut list = list_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(format!("{list}"), "NULL");

    list.append(9).unwrap();
    assert_eq!(values(&list), vec![9]);
    list.destroy();
}

#[test]
fn test_single_list_debug() {
    let list = list_of(&[1, 2]);
    assert_eq!(format!("{list:?}"), "[1, 2]");
}

#[derive(Node)]
#[node(crate_path = "crate")]
struct Job {
    link: SingleLink<Self>,
    data: (u32, &'static str),
}

#[test]
fn test_derived_node_in_list() {
    let mut jobs = LinkedList::<Job>::new();
    jobs.append((1, "fetch")).unwrap();
    jobs.append((3, "test")).unwrap();
    jobs.insert(1, (2, "build")).unwrap();

    let names: Vec<_> = jobs.iter().map(|(_, name)| *name).collect();
    assert_eq!(names, vec!["fetch", "build", "test"]);
    assert_eq!(jobs.index_of(&(3, "test")), 2);

    for (id, _) in jobs.iter_mut() {
        *id += 100;
    }
    assert_eq!(jobs.first(), Some(&(101, "fetch")));
}

#[test]
fn test_single_node_standalone() {
    let mut node = SingleNode::new(5);
    assert!(node.next().is_none());
    *node.data_mut() = 6;

    let tail = crate::heap::try_box(SingleNode::new(7)).unwrap();
    assert!(node.set_next(Some(tail)).is_none());
    assert_eq!(node.next().map(|n| *n.data()), Some(7));

    let (data, next) = node.split_mut();
    *data += 1;
    *next.unwrap().data_mut() += 1;
    assert_eq!(*node.data(), 7);
    assert_eq!(*node.take_next().unwrap().data(), 8);
}
