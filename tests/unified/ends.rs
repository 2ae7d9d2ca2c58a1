use crate::prelude::*;

#[test]
fn test_append_keeps_call_order() {
  let mut list = List::new();

  for i in 0 .. 10 {
    let _ = list.append(i);
    check(&list);
    assert!(list.len() == i + 1);
  }

  assert!(list.to_vec() == (0 .. 10).collect::<Vec<_>>());
}

#[test]
fn test_prepend_reverses_call_order() {
  let mut list = List::new();

  for i in 0 .. 10 {
    let _ = list.prepend(i);
    check(&list);
  }

  assert!(list.to_vec() == (0 .. 10).rev().collect::<Vec<_>>());
}

#[test]
fn test_prepend_on_empty_sets_tail() {
  let mut list = List::new();
  let _ = list.prepend(1);
  check(&list);
  assert!(list.last() == Some(&1));
  let _ = list.append(2);
  check(&list);
  assert!(list.to_vec() == [1, 2]);
}

#[test]
fn test_append_then_delete_tail() {
  for n in 1 .. 6 {
    let mut list = List::from_values(0 .. n);
    let before = list.to_vec();
    let _ = list.append(99);
    assert!(list.delete_tail() == DeleteTail::Removed(99));
    check(&list);
    assert!(list.to_vec() == before);
  }
}

#[test]
fn test_prepend_then_delete_head() {
  for n in 0 .. 6 {
    let mut list = List::from_values(0 .. n);
    let before = list.to_vec();
    let _ = list.prepend(99);
    assert!(list.delete_head());
    check(&list);
    assert!(list.to_vec() == before);
  }
}

#[test]
fn test_delete_head() {
  let mut list = List::<u8>::new();
  assert!(! list.delete_head());
  check(&list);

  let mut list = List::from([1]);
  assert!(list.delete_head());
  check(&list);
  assert!(list.is_empty());

  let mut list = List::from([1, 2]);
  assert!(list.delete_head());
  check(&list);
  assert!(list.to_vec() == [2]);
}

#[test]
fn test_delete_tail() {
  init_logger();

  let mut list = List::<u8>::new();
  assert!(list.delete_tail() == DeleteTail::Empty);
  assert!(! list.delete_tail().is_removed());
  check(&list);

  let mut list = List::from([5]);
  assert!(list.delete_tail() == DeleteTail::RemovedSingleton(5));
  check(&list);
  assert!(list.len() == 0);

  let mut list = List::from([1, 2, 3]);
  assert!(list.delete_tail() == DeleteTail::Removed(3));
  check(&list);
  assert!(list.last() == Some(&2));
  assert!(list.delete_tail().into_value() == Some(2));
  assert!(list.delete_tail() == DeleteTail::RemovedSingleton(1));
  assert!(list.delete_tail().into_value().is_none());
  check(&list);

  let _ = list.append(4);
  check(&list);
  assert!(list.to_vec() == [4]);
}

#[test]
fn test_pop() {
  let mut list = List::from([1, 2, 3]);
  assert!(list.pop_front() == Some(1));
  assert!(list.pop_back() == Some(3));
  assert!(list.pop_back() == Some(2));
  assert!(list.pop_back().is_none());
  assert!(list.pop_front().is_none());
  check(&list);
}
