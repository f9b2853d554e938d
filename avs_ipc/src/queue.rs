//! Bounded message mailbox
//!
//! FIFO delivery with an explicit capacity limit, one queue per direction.

use std::collections::VecDeque;
use thiserror::Error;

/// Queue error types
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("mailbox is full")]
    Full,
}

/// Bounded FIFO queue of wire messages
#[derive(Debug, Clone)]
pub struct MessageQueue<T> {
    capacity: usize,
    messages: VecDeque<T>,
}

impl<T> MessageQueue<T> {
    /// Creates a queue with the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            messages: VecDeque::new(),
        }
    }

    /// Returns the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of queued messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Pushes a message onto the queue
    pub fn push(&mut self, message: T) -> Result<(), QueueError> {
        if self.messages.len() >= self.capacity {
            return Err(QueueError::Full);
        }
        self.messages.push_back(message);
        Ok(())
    }

    /// Pops the next message in delivery order
    pub fn pop(&mut self) -> Option<T> {
        self.messages.pop_front()
    }
}
