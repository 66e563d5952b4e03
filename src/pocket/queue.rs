//! Bounded FIFO work queue for the breadth-first table build.

use std::collections::VecDeque;

use super::types::error::{PocketError, Result};

/// A first-in first-out queue with a fixed capacity.
///
/// Storage grows on demand up to `capacity`; pushing beyond it fails instead
/// of reallocating without bound.
#[derive(Debug)]
pub struct WorkQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> WorkQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Appends an item at the back.
    ///
    /// # Errors
    /// `QueueFull` if the queue already holds `capacity` items.
    pub fn enqueue(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(PocketError::QueueFull { capacity: self.capacity });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Removes and returns the front item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front item without removing it.
    pub fn peek(&self) -> Option<T> {
        self.items.front().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
