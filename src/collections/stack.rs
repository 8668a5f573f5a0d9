//! `BoundedStack` — an array-backed LIFO with a capacity fixed at creation.

use super::alloc_slots;
use crate::error::{AllocError, CapacityError};

/// A LIFO of vertex indices backed by a fixed-size slice.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `push` | \(O(1)\) |
/// | `pop` | \(O(1)\) |
/// | `clear` | \(O(1)\) |
#[derive(Debug, Clone)]
pub struct BoundedStack {
    slots: Box<[usize]>,
    len: usize,
}

impl BoundedStack {
    /// Creates an empty stack able to hold `capacity` indices.
    ///
    /// # Panics
    /// Panics if the storage cannot be allocated. Use [`try_with_capacity`](Self::try_with_capacity)
    /// to handle that case.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(stack) => stack,
            Err(err) => panic!("stack of capacity {capacity}: {err}"),
        }
    }

    /// Creates an empty stack, reporting allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            slots: alloc_slots(capacity)?,
            len: 0,
        })
    }

    /// Returns the fixed capacity.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of pending indices.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Pushes `value` on top of the stack.
    ///
    /// Returns `Err` without modifying the stack when it is full.
    #[inline]
    pub fn push(&mut self, value: usize) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError {
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the top index, or `None` if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        Some(self.slots[self.len])
    }

    /// Returns the top index without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.len.checked_sub(1).map(|top| self.slots[top])
    }

    /// Discards every pending index. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}
