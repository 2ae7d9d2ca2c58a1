#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use alloc::vec::Vec;
use allocator::AllocError;
use allocator::Allocator;
use allocator::Global;
use core::alloc::Layout;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::marker::PhantomData;
use core::ptr::NonNull;
use iter::IntoIter;
use iter::Iter;
use iter::IterMut;
use iter::Nodes;
use log::debug;
use log::trace;
use log::warn;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod allocator;

pub mod iter;

mod ptr;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list with a tail pointer.
///
/// Values can be added at either end in constant time. Removal from the front
/// is constant time, removal from the back walks the chain from the head.
///
/// Node storage comes from the allocator `A`, which defaults to the global
/// heap.
///
/// The list does no internal locking. It is `Send` and `Sync` whenever its
/// element type and allocator are, so sharing one between threads means
/// putting it behind a lock and mutating through that lock.

pub struct List<T, A: Allocator = Global> {
  head: Link<T>,
  tail: Link<T>,
  size: usize,
  allocator: A,
  marker: PhantomData<T>,
}

unsafe impl<T, A: Allocator> Send for List<T, A> where T: Send, A: Send { }

unsafe impl<T, A: Allocator> Sync for List<T, A> where T: Sync, A: Sync { }

/// One element of a [`List`], together with the link to its successor.
///
/// Nodes are only ever observed by shared reference while their list is
/// borrowed, so a node reference can never outlive its removal from the list.

pub struct Node<T> {
  value: T,
  next: Link<T>,
}

unsafe impl<T> Send for Node<T> where T: Send { }

unsafe impl<T> Sync for Node<T> where T: Sync { }

/// The outcome of [`List::delete_tail`].

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeleteTail<T> {
  /// The list was empty and nothing was removed.
  Empty,
  /// The list held exactly one element. It was removed, leaving the list
  /// empty.
  RemovedSingleton(T),
  /// The last of two or more elements was removed.
  Removed(T),
}

/// Failure of a fallible list operation.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// The allocator could not provide storage for a new node.
  #[error("failed to allocate a list node ({size} bytes, align {align})")]
  AllocFailed {
    /// Size in bytes of the requested node.
    size: usize,
    /// Alignment of the requested node.
    align: usize,
  },
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<T> = Option<NonNull<Node<T>>>;

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Layout) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    alloc::alloc::handle_alloc_error(layout)
  }
}

impl Fail for Error {
  #[inline(never)]
  #[cold]
  fn fail<T>(layout: Layout) -> Result<T, Self> {
    warn!("singly: failed to allocate a node of {} bytes", layout.size());
    Err(Error::AllocFailed { size: layout.size(), align: layout.align() })
  }
}

impl From<Error> for AllocError {
  fn from(_: Error) -> Self {
    AllocError
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Node<T> {
  /// The value held by this node.

  pub fn value(&self) -> &T {
    &self.value
  }

  /// The node after this one, or `None` if this node is the tail.

  pub fn next(&self) -> Option<&Node<T>> {
    self.next.map(|p| unsafe { ptr::as_ref(p) })
  }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Node")
      .field("value", &self.value)
      .field("has_next", &self.next.is_some())
      .finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// DeleteTail                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> DeleteTail<T> {
  /// Whether an element was removed.

  pub fn is_removed(&self) -> bool {
    ! matches!(self, Self::Empty)
  }

  /// The removed value, if any.

  pub fn into_value(self) -> Option<T> {
    match self {
      Self::Empty => None,
      Self::RemovedSingleton(x) | Self::Removed(x) => Some(x),
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator.

  pub const fn new() -> Self {
    Self::new_in(Global)
  }

  /// Creates a list holding `values` in iteration order, backed by the global
  /// allocator.
  ///
  /// The initializer must be iterable:
  ///
  /// ```compile_fail
  /// let _ = singly::List::from_values(5);
  /// ```
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_values<I>(values: I) -> Self
  where
    I: IntoIterator<Item = T>
  {
    Self::from_values_in(values, Global)
  }

  /// Creates a list holding `values` in iteration order, backed by the global
  /// allocator.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Values already taken
  /// from the iterator are dropped.

  pub fn try_from_values<I>(values: I) -> Result<Self, Error>
  where
    I: IntoIterator<Item = T>
  {
    Self::try_from_values_in(values, Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes will be allocated by `allocator`.

  pub const fn new_in(allocator: A) -> Self {
    Self {
      head: None,
      tail: None,
      size: 0,
      allocator,
      marker: PhantomData,
    }
  }

  /// Creates a list holding `values` in iteration order, with nodes allocated
  /// by `allocator`.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn from_values_in<I>(values: I, allocator: A) -> Self
  where
    I: IntoIterator<Item = T>
  {
    let mut list = Self::new_in(allocator);
    let _ = list.append_from(values);
    list
  }

  /// Creates a list holding `values` in iteration order, with nodes allocated
  /// by `allocator`.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory.

  pub fn try_from_values_in<I>(values: I, allocator: A) -> Result<Self, Error>
  where
    I: IntoIterator<Item = T>
  {
    let mut list = Self::new_in(allocator);
    let _ = list.try_append_from(values)?;
    Ok(list)
  }

  /// A reference to the allocator backing this list.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// The number of elements in the list.

  pub fn len(&self) -> usize {
    self.size
  }

  /// Whether the list has no elements.

  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  /// The first node, or `None` if the list is empty.

  pub fn head(&self) -> Option<&Node<T>> {
    self.head.map(|p| unsafe { ptr::as_ref(p) })
  }

  /// The last node, or `None` if the list is empty.

  pub fn tail(&self) -> Option<&Node<T>> {
    self.tail.map(|p| unsafe { ptr::as_ref(p) })
  }

  /// The first value, or `None` if the list is empty.

  pub fn first(&self) -> Option<&T> {
    self.head().map(Node::value)
  }

  /// The last value, or `None` if the list is empty.

  pub fn last(&self) -> Option<&T> {
    self.tail().map(Node::value)
  }

  /// A mutable reference to the first value.

  pub fn first_mut(&mut self) -> Option<&mut T> {
    self.head.map(|p| &mut unsafe { ptr::as_mut_ref(p) }.value)
  }

  /// A mutable reference to the last value.

  pub fn last_mut(&mut self) -> Option<&mut T> {
    self.tail.map(|p| &mut unsafe { ptr::as_mut_ref(p) }.value)
  }

  fn link_front<E: Fail>(&mut self, value: T) -> Result<(), E> {
    let p = allocator::alloc::<_, _, E>(&self.allocator, Node { value, next: self.head })?;

    if self.tail.is_none() {
      self.tail = Some(p);
    }

    self.head = Some(p);
    self.size += 1;
    Ok(())
  }

  fn link_back<E: Fail>(&mut self, value: T) -> Result<(), E> {
    let p = allocator::alloc::<_, _, E>(&self.allocator, Node { value, next: None })?;

    match self.tail {
      None => self.head = Some(p),
      Some(t) => {
        let t = unsafe { ptr::as_mut_ref(t) };
        t.next = Some(p);
      }
    }

    self.tail = Some(p);
    self.size += 1;
    Ok(())
  }

  // The successor of the removed head becomes the new head. Emptying the list
  // clears the tail too.

  fn unlink_head(&mut self) -> Option<T> {
    let p = self.head?;
    let node = unsafe { allocator::free(&self.allocator, p) };

    self.head = node.next;

    if self.head.is_none() {
      self.tail = None;
    }

    self.size -= 1;
    Some(node.value)
  }

  /// Adds `value` to the front of the list.
  ///
  /// Returns the list so that calls can be chained.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn prepend(&mut self, value: T) -> &mut Self {
    unwrap(self.link_front(value));
    self
  }

  /// Adds `value` to the front of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case `value`
  /// is dropped and the list is unchanged.

  pub fn try_prepend(&mut self, value: T) -> Result<&mut Self, Error> {
    self.link_front(value)?;
    Ok(self)
  }

  /// Adds `value` to the back of the list.
  ///
  /// Returns the list so that calls can be chained.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append(&mut self, value: T) -> &mut Self {
    unwrap(self.link_back(value));
    self
  }

  /// Adds `value` to the back of the list.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case `value`
  /// is dropped and the list is unchanged.

  pub fn try_append(&mut self, value: T) -> Result<&mut Self, Error> {
    self.link_back(value)?;
    Ok(self)
  }

  /// Appends every element of `values`, in iteration order.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append_from<I>(&mut self, values: I) -> &mut Self
  where
    I: IntoIterator<Item = T>
  {
    for value in values {
      unwrap(self.link_back(value));
    }

    self
  }

  /// Appends every element of `values`, in iteration order.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory. Elements appended
  /// before the failure stay in the list.

  pub fn try_append_from<I>(&mut self, values: I) -> Result<&mut Self, Error>
  where
    I: IntoIterator<Item = T>
  {
    for value in values {
      self.link_back(value)?;
    }

    Ok(self)
  }

  /// Removes every element equal to `value`.
  ///
  /// Equality is [`PartialEq`], with no conversion between types. Returns
  /// whether anything was removed.

  pub fn delete<Q>(&mut self, value: &Q) -> bool
  where
    T: PartialEq<Q>,
    Q: ?Sized
  {
    let n = self.remove_matching(value, usize::MAX);
    debug!("singly: delete removed {} node(s)", n);
    n != 0
  }

  /// Removes the first element equal to `value`.
  ///
  /// Returns whether anything was removed.

  pub fn delete_one<Q>(&mut self, value: &Q) -> bool
  where
    T: PartialEq<Q>,
    Q: ?Sized
  {
    self.remove_matching(value, 1) != 0
  }

  fn remove_matching<Q>(&mut self, value: &Q, limit: usize) -> usize
  where
    T: PartialEq<Q>,
    Q: ?Sized
  {
    let mut removed = 0;

    while removed < limit {
      let Some(p) = self.head else { return removed; };

      if unsafe { ptr::as_ref(p) }.value.ne(value) {
        break;
      }

      let _ = self.unlink_head();
      removed += 1;
    }

    // The head is now either absent or a survivor. Every splice below keeps
    // `p` on a surviving node, so `p` is the right tail if the old tail goes.

    let Some(mut p) = self.head else { return removed; };

    while removed < limit {
      let Some(q) = unsafe { ptr::as_ref(p) }.next else { break; };

      if unsafe { ptr::as_ref(q) }.value.ne(value) {
        p = q;
        continue;
      }

      let node = unsafe { allocator::free(&self.allocator, q) };
      let prev = unsafe { ptr::as_mut_ref(p) };
      prev.next = node.next;

      if self.tail == Some(q) {
        trace!("singly: tail removed, retargeting to its predecessor");
        self.tail = Some(p);
      }

      self.size -= 1;
      removed += 1;
      trace!("singly: spliced out a node, {} remaining", self.size);
    }

    removed
  }

  /// Removes the first element.
  ///
  /// Returns `false` if the list was empty.

  pub fn delete_head(&mut self) -> bool {
    self.unlink_head().is_some()
  }

  /// Removes the last element.
  ///
  /// This walks the chain from the head to find the new tail, so it takes time
  /// linear in the length of the list.

  pub fn delete_tail(&mut self) -> DeleteTail<T> {
    let (Some(head), Some(tail)) = (self.head, self.tail) else {
      return DeleteTail::Empty;
    };

    if head == tail {
      let node = unsafe { allocator::free(&self.allocator, head) };
      self.head = None;
      self.tail = None;
      self.size -= 1;
      return DeleteTail::RemovedSingleton(node.value);
    }

    let mut p = head;
    let mut steps = 1_usize;

    while let Some(q) = unsafe { ptr::as_ref(p) }.next {
      if q == tail {
        break;
      }

      p = q;
      steps += 1;
    }

    trace!("singly: delete_tail walked {} link(s)", steps);

    let prev = unsafe { ptr::as_mut_ref(p) };
    prev.next = None;

    self.tail = Some(p);
    self.size -= 1;

    let node = unsafe { allocator::free(&self.allocator, tail) };
    DeleteTail::Removed(node.value)
  }

  /// Removes the first element and returns it.

  pub fn pop_front(&mut self) -> Option<T> {
    self.unlink_head()
  }

  /// Removes the last element and returns it.
  ///
  /// Like [`delete_tail`](Self::delete_tail), this takes linear time.

  pub fn pop_back(&mut self) -> Option<T> {
    self.delete_tail().into_value()
  }

  /// Removes every element.

  pub fn clear(&mut self) {
    while let Some(x) = self.unlink_head() {
      drop::<T>(x);
    }
  }

  /// Whether any element equals `value`.

  pub fn includes_value<Q>(&self, value: &Q) -> bool
  where
    T: PartialEq<Q>,
    Q: ?Sized
  {
    self.iter().any(|x| x == value)
  }

  /// Whether any element equals the value held by `node`.
  ///
  /// `node` may belong to this list or to any other.

  pub fn includes_node(&self, node: &Node<T>) -> bool
  where
    T: PartialEq
  {
    self.includes_value(node.value())
  }

  /// The first node whose value satisfies `predicate`.
  ///
  /// The predicate must be callable:
  ///
  /// ```compile_fail
  /// let list = singly::List::from([1, 2, 3]);
  /// let _ = list.find(4);
  /// ```

  pub fn find<F>(&self, predicate: F) -> Option<&Node<T>>
  where
    F: FnMut(&T) -> bool
  {
    let mut predicate = predicate;
    self.nodes().find(|node| predicate(&node.value))
  }

  /// A mutable reference to the first value satisfying `predicate`.

  pub fn find_mut<F>(&mut self, predicate: F) -> Option<&mut T>
  where
    F: FnMut(&T) -> bool
  {
    let mut predicate = predicate;
    self.iter_mut().find(|x| predicate(&**x))
  }

  /// Copies the values into a vector, head first.

  pub fn to_vec(&self) -> Vec<T>
  where
    T: Clone
  {
    self.iter().cloned().collect()
  }

  /// References to the values, head first.

  pub fn values(&self) -> Vec<&T> {
    self.iter().collect()
  }

  /// References to the nodes, head first.

  pub fn to_nodes(&self) -> Vec<&Node<T>> {
    self.nodes().collect()
  }

  /// An iterator over the values, head first.

  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.head, self.size)
  }

  /// An iterator over mutable references to the values, head first.

  pub fn iter_mut(&mut self) -> IterMut<'_, T> {
    IterMut::new(self.head, self.size)
  }

  /// An iterator over the nodes, head first.

  pub fn nodes(&self) -> Nodes<'_, T> {
    Nodes::new(self.head, self.size)
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    self.clear()
  }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: Clone, A: Allocator + Clone> Clone for List<T, A> {
  fn clone(&self) -> Self {
    Self::from_values_in(self.iter().cloned(), self.allocator.clone())
  }
}

impl<T, U, A, B> PartialEq<List<U, B>> for List<T, A>
where
  T: PartialEq<U>,
  A: Allocator,
  B: Allocator
{
  fn eq(&self, other: &List<U, B>) -> bool {
    self.size == other.size && self.iter().zip(other.iter()).all(|(x, y)| x == y)
  }
}

impl<T: Eq, A: Allocator> Eq for List<T, A> { }

impl<T: Hash, A: Allocator> Hash for List<T, A> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.size);

    for x in self.iter() {
      x.hash(state);
    }
  }
}

impl<T> FromIterator<T> for List<T, Global> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::from_values(iter)
  }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let _ = self.append_from(iter);
  }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for List<T, A> {
  fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
    let _ = self.append_from(iter.into_iter().copied());
  }
}

impl<T, const N: usize> From<[T; N]> for List<T, Global> {
  fn from(values: [T; N]) -> Self {
    Self::from_values(values)
  }
}

impl<T> From<Vec<T>> for List<T, Global> {
  fn from(values: Vec<T>) -> Self {
    Self::from_values(values)
  }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
  type Item = T;
  type IntoIter = IntoIter<T, A>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut List<T, A> {
  type Item = &'a mut T;
  type IntoIter = IterMut<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter_mut()
  }
}
