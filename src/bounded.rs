//! Fixed-capacity containers
//!
//! Every container here has its capacity fixed at construction. Going past
//! it is a `CapacityExceeded` error, never a silent reallocation; taking from
//! an empty container is `Underflow` (or `None`, where the caller treats
//! "empty" as a normal outcome).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::layers::LAYER_COUNT;

/// LIFO stack with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Push onto the top of the stack
    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(PaintError::CapacityExceeded {
                container: "stack",
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Pop the top item, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Peek at the top item
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
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

    /// Iterate from bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    /// Reject a deserialized stack whose contents exceed its capacity
    pub(crate) fn validated(self) -> Result<Self> {
        if self.items.len() > self.capacity {
            return Err(PaintError::CapacityExceeded {
                container: "stack",
                capacity: self.capacity,
            });
        }
        Ok(self)
    }
}

/// FIFO queue with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append to the tail
    pub fn append(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(PaintError::CapacityExceeded {
                container: "queue",
                capacity: self.capacity,
            });
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Remove and return the head
    pub fn serve(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(PaintError::Underflow { container: "queue" })
    }

    /// Reverse the order of the items in place
    pub fn reverse(&mut self) {
        self.items.make_contiguous().reverse();
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

    /// Iterate from head to tail without consuming
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    /// Reject a deserialized queue whose contents exceed its capacity
    /// Same items under a new capacity; fails if they no longer fit
    pub(crate) fn resized(mut self, capacity: usize) -> Result<Self> {
        self.capacity = capacity;
        self.validated()
    }

    pub(crate) fn validated(self) -> Result<Self> {
        if self.items.len() > self.capacity {
            return Err(PaintError::CapacityExceeded {
                container: "queue",
                capacity: self.capacity,
            });
        }
        Ok(self)
    }
}

/// Membership set over the fixed priority domain `0..LAYER_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrioritySet {
    bits: u16,
}

impl PrioritySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a priority; returns `true` if it was absent.
    ///
    /// Priorities outside the domain are never stored.
    pub fn insert(&mut self, priority: u8) -> bool {
        if usize::from(priority) >= LAYER_COUNT || self.contains(priority) {
            return false;
        }
        self.bits |= 1 << priority;
        true
    }

    /// Remove a priority; returns `true` if it was present
    pub fn remove(&mut self, priority: u8) -> bool {
        if !self.contains(priority) {
            return false;
        }
        self.bits &= !(1 << priority);
        true
    }

    pub fn contains(&self, priority: u8) -> bool {
        usize::from(priority) < LAYER_COUNT && self.bits & (1 << priority) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Present priorities in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..LAYER_COUNT as u8).filter(move |p| self.contains(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_capacity() {
        let mut stack = BoundedStack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert!(stack.is_full());

        let err = stack.push(3).unwrap_err();
        assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.peek(), Some(&1));
    }

    #[test]
    fn test_stack_pop_empty() {
        let mut stack: BoundedStack<u8> = BoundedStack::new(4);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_queue_fifo_and_reverse() {
        let mut queue = BoundedQueue::new(3);
        for i in 1..=3 {
            queue.append(i).unwrap();
        }
        assert!(queue.append(4).is_err());

        queue.reverse();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(queue.serve().unwrap(), 3);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_queue_serve_empty_underflows() {
        let mut queue: BoundedQueue<u8> = BoundedQueue::new(1);
        let err = queue.serve().unwrap_err();
        assert_eq!(err.error_code(), "UNDERFLOW");
    }

    #[test]
    fn test_queue_reverse_after_wraparound() {
        let mut queue = BoundedQueue::new(3);
        queue.append('a').unwrap();
        queue.append('b').unwrap();
        queue.serve().unwrap();
        queue.append('c').unwrap();
        queue.append('d').unwrap();

        queue.reverse();
        assert_eq!(queue.iter().copied().collect::<String>(), "dcb");
    }

    #[test]
    fn test_priority_set() {
        let mut set = PrioritySet::new();
        assert!(set.insert(7));
        assert!(set.insert(2));
        assert!(!set.insert(7));
        assert!(!set.insert(9));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 7]);

        assert!(set.remove(7));
        assert!(!set.remove(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_validated_rejects_overfull() {
        let json = r#"{"items":[1,2,3],"capacity":2}"#;
        let stack: BoundedStack<u8> = serde_json::from_str(json).unwrap();
        assert!(stack.validated().is_err());
    }
}
