//! Doubly linked list addressed by position.
//!
//! Nodes are stored in an [`Arena`] and linked by [`Handle`]. `next` is the
//! owning direction; `prev` is a navigation-only back link. Both ends are O(1);
//! anything addressed by position walks forward from the head.
//!
//! Invariants: `head.prev` and `tail.next` are `None`, and exactly `len` nodes
//! are reachable forward from `head`.

use crate::arena::{Arena, Handle};
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// Ordered, position-addressable sequence.
#[derive(Debug, Clone)]
pub struct PositionalList<T> {
    nodes: Arena<ListNode<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PositionalList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|h| &self.nodes[h].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|h| &self.nodes[h].value)
    }

    /// Handle of the node at `position`, walking forward from the head.
    fn handle_at(&self, position: usize) -> Option<Handle> {
        if position >= self.len {
            return None;
        }
        let mut current = self.head?;
        for _ in 0..position {
            current = self.nodes[current].next?;
        }
        Some(current)
    }

    pub fn insert_at_beginning(&mut self, value: T) {
        let handle = self.nodes.insert(ListNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
    }

    pub fn insert_at_end(&mut self, value: T) {
        let handle = self.nodes.insert(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
    }

    /// Insert so that `value` ends up at `position` (`0..=len`).
    ///
    /// Returns `false` without modifying the list when `position > len`.
    pub fn insert_at_position(&mut self, value: T, position: usize) -> bool {
        if position > self.len {
            return false;
        }
        if position == 0 {
            self.insert_at_beginning(value);
            return true;
        }
        if position == self.len {
            self.insert_at_end(value);
            return true;
        }

        let Some(next) = self.handle_at(position) else {
            return false;
        };
        // Interior position: `next` always has a predecessor.
        let prev = self.nodes[next].prev;
        let handle = self.nodes.insert(ListNode {
            value,
            prev,
            next: Some(next),
        });
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(handle);
        }
        self.nodes[next].prev = Some(handle);
        self.len += 1;
        true
    }

    /// Detach `handle` from its neighbours and free its slot.
    fn unlink(&mut self, handle: Handle) -> Option<T> {
        let ListNode { value, prev, next } = self.nodes.remove(handle)?;
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        Some(value)
    }

    pub fn delete_from_beginning(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    pub fn delete_from_end(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    /// Remove and return the value at `position` (`0..len`).
    pub fn delete_at_position(&mut self, position: usize) -> Option<T> {
        if self.len.checked_sub(1) == Some(position) {
            return self.delete_from_end();
        }
        let handle = self.handle_at(position)?;
        self.unlink(handle)
    }

    /// Value at `position`, or `None` when out of range.
    pub fn get_at_position(&self, position: usize) -> Option<&T> {
        self.handle_at(position).map(|h| &self.nodes[h].value)
    }

    /// Replace the value at `position`. Returns `false` when out of range.
    pub fn update_at_position(&mut self, position: usize, value: T) -> bool {
        match self.handle_at(position) {
            Some(handle) => {
                self.nodes[handle].value = value;
                true
            }
            None => false,
        }
    }

    /// Front-to-back iterator; reverse it for back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T: PartialEq> PositionalList<T> {
    /// Position of the first element equal to `value`.
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Remove the first element equal to `value`.
    pub fn delete_by_value(&mut self, value: &T) -> bool {
        let mut current = self.head;
        while let Some(handle) = current {
            let node = &self.nodes[handle];
            if node.value == *value {
                self.unlink(handle);
                return true;
            }
            current = node.next;
        }
        false
    }
}

impl<T: Clone> PositionalList<T> {
    /// Owned snapshot in list order.
    pub fn to_list(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.insert_at_end(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Borrowing iterator over a [`PositionalList`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = &list.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
