use singly::List;
use singly::allocator::Allocator;

// Walks the chain and asserts that it agrees with the list's bookkeeping:
//
// - `len == 0` iff there is no head iff there is no tail
// - `len == 1` implies head and tail are the same node
// - following `next` from the head visits exactly `len` nodes and stops at
//   the tail, whose `next` is absent

pub(crate) fn check<T, A: Allocator>(list: &List<T, A>) {
  match (list.head(), list.tail()) {
    (None, None) => {
      assert!(list.len() == 0);
      assert!(list.is_empty());
    }
    (Some(head), Some(tail)) => {
      assert!(list.len() > 0);
      assert!(tail.next().is_none());

      if list.len() == 1 {
        assert!(std::ptr::eq(head, tail));
      }

      let mut node = head;
      let mut n = 1;

      while let Some(next) = node.next() {
        assert!(n < list.len(), "chain is longer than len");
        node = next;
        n += 1;
      }

      assert!(n == list.len());
      assert!(std::ptr::eq(node, tail));
      assert!(list.nodes().len() == list.len());
    }
    _ => panic!("head and tail disagree about emptiness"),
  }
}
