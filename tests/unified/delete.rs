use crate::prelude::*;

#[test]
fn test_delete_from_empty() {
  init_logger();
  let mut list = List::<u64>::new();
  assert!(! list.delete(&1));
  assert!(! list.delete_one(&1));
  check(&list);
  assert!(list.len() == 0);
}

#[test]
fn test_delete_sole_element() {
  let mut list = List::from([7]);
  assert!(list.delete(&7));
  check(&list);
  assert!(list.head().is_none());
  assert!(list.tail().is_none());

  let mut list = List::from([7]);
  assert!(list.delete_one(&7));
  check(&list);
  assert!(list.is_empty());
}

#[test]
fn test_delete_all_matches() {
  init_logger();
  let mut list = List::from([4, 4, 1, 4, 4, 2, 4, 4]);
  assert!(list.delete(&4));
  check(&list);
  assert!(list.to_vec() == [1, 2]);
  assert!(list.last() == Some(&2));
}

#[test]
fn test_delete_every_element() {
  let mut list = List::from([3, 3, 3]);
  assert!(list.delete(&3));
  check(&list);
  assert!(list.is_empty());

  let _ = list.append(1);
  check(&list);
  assert!(list.to_vec() == [1]);
}

#[test]
fn test_delete_one_stops_after_first_match() {
  let mut list = List::from([1, 4, 2, 4]);
  assert!(list.delete_one(&4));
  check(&list);
  assert!(list.to_vec() == [1, 2, 4]);

  let mut list = List::from([4, 1, 4]);
  assert!(list.delete_one(&4));
  check(&list);
  assert!(list.to_vec() == [1, 4]);

  let mut list = List::from([1, 4, 4, 2]);
  assert!(list.delete_one(&4));
  check(&list);
  assert!(list.to_vec() == [1, 4, 2]);
}

#[test]
fn test_delete_tail_value_retargets_tail() {
  let mut list = List::from([1, 2, 3]);
  assert!(list.delete(&3));
  check(&list);
  assert!(list.last() == Some(&2));

  let _ = list.append(9);
  check(&list);
  assert!(list.to_vec() == [1, 2, 9]);

  let mut list = List::from([1, 3, 2, 3]);
  assert!(list.delete_one(&3));
  check(&list);
  assert!(list.last() == Some(&3));
  assert!(list.delete_one(&3));
  check(&list);
  assert!(list.last() == Some(&2));
}

#[test]
fn test_delete_without_match() {
  let mut list = List::from([1, 2, 3]);
  assert!(! list.delete(&5));
  assert!(! list.delete_one(&5));
  check(&list);
  assert!(list.to_vec() == [1, 2, 3]);
}

#[test]
fn test_delete_is_strict() {
  let mut list = List::from(["4".to_string(), "b".to_string(), "4".to_string()]);
  assert!(list.delete("b"));
  assert!(! list.delete("B"));
  check(&list);
  expect![[r#"["4", "4"]"#]].assert_eq(&format!("{:?}", list));

  let mut list = List::from([0, 1, 0]);
  assert!(! list.delete(&2));
  assert!(list.delete(&0));
  assert!(list.to_vec() == [1]);
}

#[test]
fn test_delete_agrees_with_retain() {
  init_logger();

  let values = (0 .. 40).map(|i| i * 13 % 4).collect::<Vec<i32>>();

  for v in 0 .. 5 {
    let mut list = List::from(values.clone());
    let mut expected = values.clone();
    expected.retain(|&x| x != v);

    let removed = list.delete(&v);
    check(&list);
    assert!(removed == values.contains(&v));
    assert!(list.len() == expected.len());
    assert!(list.to_vec() == expected);
  }
}

#[test]
fn test_delete_one_agrees_with_position() {
  let values = (0 .. 40).map(|i| i * 13 % 4).collect::<Vec<i32>>();

  for v in 0 .. 5 {
    let mut list = List::from(values.clone());
    let mut expected = values.clone();

    if let Some(i) = expected.iter().position(|&x| x == v) {
      let _ = expected.remove(i);
    }

    let removed = list.delete_one(&v);
    check(&list);
    assert!(removed == values.contains(&v));
    assert!(list.to_vec() == expected);
  }
}
