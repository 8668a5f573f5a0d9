//! Fixed-capacity containers of vertex indices used by the traversal engine.
//!
//! Both containers allocate their storage once and never grow. Capacity is an
//! upper bound the caller proves up front; pushing past it returns a
//! [`CapacityError`](crate::error::CapacityError) instead of reallocating.

pub mod queue;
pub mod stack;

pub use queue::BoundedQueue;
pub use stack::BoundedStack;

use crate::error::AllocError;

/// Allocates a zeroed, exactly-sized slot buffer.
pub(crate) fn alloc_slots(capacity: usize) -> Result<Box<[usize]>, AllocError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize(capacity, 0);
    Ok(slots.into_boxed_slice())
}
