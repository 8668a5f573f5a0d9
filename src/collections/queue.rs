//! `BoundedQueue` — a circular FIFO with a capacity fixed at creation.
//!
//! Ring-buffer mechanics: `head` is the next slot to dequeue from, the slot to
//! enqueue into is `(head + len) % capacity`. Storage is never reallocated.

use super::alloc_slots;
use crate::error::{AllocError, CapacityError};

/// A FIFO of vertex indices backed by a fixed-size ring buffer.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `enqueue` | \(O(1)\) |
/// | `dequeue` | \(O(1)\) |
/// | `clear` | \(O(1)\) |
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    slots: Box<[usize]>,
    head: usize,
    len: usize,
}

impl BoundedQueue {
    /// Creates an empty queue able to hold `capacity` indices.
    ///
    /// # Panics
    /// Panics if the storage cannot be allocated. Use [`try_with_capacity`](Self::try_with_capacity)
    /// to handle that case.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(queue) => queue,
            Err(err) => panic!("queue of capacity {capacity}: {err}"),
        }
    }

    /// Creates an empty queue, reporting allocation failure.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Ok(Self {
            slots: alloc_slots(capacity)?,
            head: 0,
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

    /// Appends `value` at the rear.
    ///
    /// Returns `Err` without modifying the queue when it is full.
    #[inline]
    pub fn enqueue(&mut self, value: usize) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError {
                capacity: self.capacity(),
            });
        }
        // Non-empty capacity here: a zero-capacity queue is always full.
        let rear = (self.head + self.len) % self.slots.len();
        self.slots[rear] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front index, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        Some(value)
    }

    /// Returns the front index without removing it.
    #[inline]
    pub fn front(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Discards every pending index. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}
