//! Iterators over a [`List`].
//!
//! All of them walk the chain from head to tail, once.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use crate::Link;
use crate::List;
use crate::Node;
use crate::allocator::Allocator;
use crate::ptr;

/// An iterator over the values of a list. See [`List::iter`].

pub struct Iter<'a, T> {
  next: Link<T>,
  len: usize,
  marker: PhantomData<&'a Node<T>>,
}

unsafe impl<'a, T> Send for Iter<'a, T> where T: Sync { }

unsafe impl<'a, T> Sync for Iter<'a, T> where T: Sync { }

/// An iterator over mutable references to the values of a list. See
/// [`List::iter_mut`].

pub struct IterMut<'a, T> {
  next: Link<T>,
  len: usize,
  marker: PhantomData<&'a mut Node<T>>,
}

unsafe impl<'a, T> Send for IterMut<'a, T> where T: Send { }

unsafe impl<'a, T> Sync for IterMut<'a, T> where T: Sync { }

/// An iterator over the nodes of a list. See [`List::nodes`].

pub struct Nodes<'a, T> {
  next: Link<T>,
  len: usize,
  marker: PhantomData<&'a Node<T>>,
}

unsafe impl<'a, T> Send for Nodes<'a, T> where T: Sync { }

unsafe impl<'a, T> Sync for Nodes<'a, T> where T: Sync { }

/// An owning iterator over the values of a list.

pub struct IntoIter<T, A: Allocator>(List<T, A>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Nodes                                                                      //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Nodes<'a, T> {
  pub(crate) fn new(head: Link<T>, len: usize) -> Self {
    Self { next: head, len, marker: PhantomData }
  }
}

impl<'a, T> Iterator for Nodes<'a, T> {
  type Item = &'a Node<T>;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let p = self.next?;
    let node = unsafe { ptr::as_ref(p) };
    self.next = node.next;
    self.len -= 1;
    Some(node)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T> ExactSizeIterator for Nodes<'a, T> { }

impl<'a, T> FusedIterator for Nodes<'a, T> { }

impl<'a, T> Clone for Nodes<'a, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, len: self.len, marker: PhantomData }
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Nodes<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iter                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iter<'a, T> {
  pub(crate) fn new(head: Link<T>, len: usize) -> Self {
    Self { next: head, len, marker: PhantomData }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let p = self.next?;
    let node = unsafe { ptr::as_ref::<'a, Node<T>>(p) };
    self.next = node.next;
    self.len -= 1;
    Some(&node.value)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> { }

impl<'a, T> FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Self { next: self.next, len: self.len, marker: PhantomData }
  }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IterMut                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> IterMut<'a, T> {
  pub(crate) fn new(head: Link<T>, len: usize) -> Self {
    Self { next: head, len, marker: PhantomData }
  }
}

impl<'a, T> Iterator for IterMut<'a, T> {
  type Item = &'a mut T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let p = self.next?;
    let node = unsafe { ptr::as_mut_ref::<'a, Node<T>>(p) };
    self.next = node.next;
    self.len -= 1;
    Some(&mut node.value)
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len, Some(self.len))
  }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> { }

impl<'a, T> FusedIterator for IterMut<'a, T> { }

impl<'a, T> fmt::Debug for IterMut<'a, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("IterMut").field("len", &self.len).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// IntoIter                                                                   //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator> IntoIter<T, A> {
  pub(crate) fn new(list: List<T, A>) -> Self {
    Self(list)
  }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.pop_front()
  }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.0.len(), Some(self.0.len()))
  }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> { }

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> { }

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("IntoIter").field(&self.0).finish()
  }
}
