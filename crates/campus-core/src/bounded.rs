//! Bounded LIFO and FIFO sequences.
//!
//! Both containers carry an optional `max_size`. Insertion into a full
//! container is refused (returns `false`, nothing changes). Shrinking the bound
//! below the current length trims immediately: the stack keeps its most
//! recently pushed items, the queue drops its oldest.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// LIFO stack with an optional capacity. Backs undo/redo history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    max_size: Option<usize>,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedStack<T> {
    /// Unbounded stack.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            max_size: None,
        }
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True only when a bound is set and reached.
    pub fn is_full(&self) -> bool {
        self.max_size.is_some_and(|max| self.items.len() >= max)
    }

    /// Push onto the top. Returns `false` (dropping `item`) when full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// The item the next `pop` would return.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Change the bound, discarding the oldest (bottom) items if the stack is
    /// now over it.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
        if let Some(max) = max_size
            && self.items.len() > max
        {
            let excess = self.items.len() - max;
            self.items.drain(..excess);
        }
    }

    /// Bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedStack<T> {
    /// Snapshot of the items, bottom to top.
    pub fn to_list(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: PartialEq> BoundedStack<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Remove the first match scanning from the bottom.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|x| x == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// FIFO queue with an optional capacity. Backs the pending-task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    max_size: Option<usize>,
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BoundedQueue<T> {
    /// Unbounded queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            max_size: None,
        }
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.max_size.is_some_and(|max| self.items.len() >= max)
    }

    /// Append at the back. Returns `false` (dropping `item`) when full.
    pub fn enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push_back(item);
        true
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The item that has waited longest.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// The most recently enqueued item.
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    /// Change the bound, dropping items from the front if the queue is now
    /// over it.
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
        if let Some(max) = max_size
            && self.items.len() > max
        {
            let excess = self.items.len() - max;
            self.items.drain(..excess);
        }
    }

    /// Front to back.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Snapshot of the items, front to back.
    pub fn to_list(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: PartialEq> BoundedQueue<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Remove the first match scanning from the front.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|x| x == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}
