//! Storage for list nodes.
//!
//! Every node of a [`List`](crate::List) lives in its own allocation obtained
//! from the list's [`Allocator`]. The trait and the default [`Global`]
//! allocator come from `allocator-api2`, so the same allocators that back
//! `allocator_api2::vec::Vec` (or, with the `allocator_api` feature on
//! nightly, `std` collections) can back a list.

pub use allocator_api2::alloc::AllocError;
pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;

use core::alloc::Layout;
use core::ptr::NonNull;
use crate::Fail;
use crate::ptr;

/// Moves `value` into a fresh allocation from `allocator`.
///
/// On failure `value` is dropped and the failure is reported through `E`.

pub(crate) fn alloc<T, A, E>(allocator: &A, value: T) -> Result<NonNull<T>, E>
where
  A: Allocator,
  E: Fail
{
  let layout = Layout::new::<T>();

  let Ok(p) = allocator.allocate(layout) else {
    return E::fail(layout);
  };

  let p = ptr::cast::<[u8], T>(p);
  unsafe { ptr::write(p, value) };
  Ok(p)
}

/// Moves the value out of `p` and returns its memory to `allocator`.
///
/// # Safety
///
/// `p` must have come from [`alloc`] with the same allocator, and must not be
/// used again.

pub(crate) unsafe fn free<T, A>(allocator: &A, p: NonNull<T>) -> T
where
  A: Allocator
{
  let value = ptr::read(p);
  allocator.deallocate(ptr::cast(p), Layout::new::<T>());
  value
}
