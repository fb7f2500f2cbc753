//! Unbalanced binary search tree mapping ordered keys to values.
//!
//! Nodes live in an [`Arena`] and own their children through handles; there
//! are no parent links. Every walk (insert, delete, traversals, height and
//! balance checks) is iterative, so a chain-shaped tree built from sorted
//! input is limited by heap memory rather than by the call stack.
//!
//! The tree never rebalances itself. [`OrderedIndex::is_balanced`] is a
//! diagnostic only.

use crate::arena::{Arena, Handle};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
struct TreeNode<K, V> {
    key: K,
    value: V,
    left: Option<Handle>,
    right: Option<Handle>,
}

/// The child slot that points at a node: the root pointer or one side of a
/// parent.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(Handle),
    Right(Handle),
}

/// Key → value store with sorted traversal.
#[derive(Debug, Clone)]
pub struct OrderedIndex<K, V> {
    nodes: Arena<TreeNode<K, V>>,
    root: Option<Handle>,
    size: usize,
}

impl<K: Ord, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> OrderedIndex<K, V> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    fn set_link(&mut self, link: Link, child: Option<Handle>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.nodes[parent].left = child,
            Link::Right(parent) => self.nodes[parent].right = child,
        }
    }

    /// Descend to `key`, returning the node and the link that points at it.
    fn locate<Q>(&self, key: &Q) -> Option<(Link, Handle)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = Link::Root;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &self.nodes[handle];
            match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some((link, handle)),
                Ordering::Less => {
                    link = Link::Left(handle);
                    current = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(handle);
                    current = node.right;
                }
            }
        }
        None
    }

    /// Insert `key`, or overwrite its value if already present.
    ///
    /// Returns `true` when a new node was created, `false` when an existing
    /// key had its value replaced.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut link = Link::Root;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = &mut self.nodes[handle];
            match key.cmp(&node.key) {
                Ordering::Equal => {
                    node.value = value;
                    return false;
                }
                Ordering::Less => {
                    link = Link::Left(handle);
                    current = node.left;
                }
                Ordering::Greater => {
                    link = Link::Right(handle);
                    current = node.right;
                }
            }
        }

        let leaf = self.nodes.insert(TreeNode {
            key,
            value,
            left: None,
            right: None,
        });
        self.set_link(link, Some(leaf));
        self.size += 1;
        true
    }

    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).map(|(_, handle)| &self.nodes[handle].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (_, handle) = self.locate(key)?;
        Some(&mut self.nodes[handle].value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).is_some()
    }

    /// Remove `key`. Returns whether anything was removed.
    ///
    /// A node with at most one child is spliced out. A node with two children
    /// takes over the key and value of its in-order successor (the minimum of
    /// its right subtree), and the successor's node is spliced out instead.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some((link, target)) = self.locate(key) else {
            return false;
        };

        let node = &self.nodes[target];
        match (node.left, node.right) {
            (None, child) | (child, None) => {
                self.set_link(link, child);
                self.nodes.remove(target);
            }
            (Some(_), Some(right)) => {
                let mut successor_link = Link::Right(target);
                let mut successor = right;
                while let Some(left) = self.nodes[successor].left {
                    successor_link = Link::Left(successor);
                    successor = left;
                }
                // The successor has no left child, so splicing in its right
                // subtree removes it.
                let successor_right = self.nodes[successor].right;
                self.set_link(successor_link, successor_right);
                let Some(promoted) = self.nodes.remove(successor) else {
                    unreachable!("successor handle came from a live link");
                };
                let node = &mut self.nodes[target];
                node.key = promoted.key;
                node.value = promoted.value;
            }
        }

        self.size -= 1;
        true
    }

    /// Smallest key, by leftmost descent.
    pub fn find_min(&self) -> Option<&K> {
        let mut handle = self.root?;
        while let Some(left) = self.nodes[handle].left {
            handle = left;
        }
        Some(&self.nodes[handle].key)
    }

    /// Largest key, by rightmost descent.
    pub fn find_max(&self) -> Option<&K> {
        let mut handle = self.root?;
        while let Some(right) = self.nodes[handle].right {
            handle = right;
        }
        Some(&self.nodes[handle].key)
    }

    fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = &self.nodes[handle];
        (&node.key, &node.value)
    }

    /// Left, node, right: keys in ascending order.
    pub fn inorder_traversal(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.nodes[handle].left;
            }
            let Some(handle) = stack.pop() else {
                break;
            };
            out.push(self.entry(handle));
            current = self.nodes[handle].right;
        }
        out
    }

    /// Node, left, right.
    pub fn preorder_traversal(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.size);
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            out.push(self.entry(handle));
            let node = &self.nodes[handle];
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Left, right, node.
    pub fn postorder_traversal(&self) -> Vec<(&K, &V)> {
        // Node-right-left preorder, reversed.
        let mut out = Vec::with_capacity(self.size);
        let mut stack: Vec<Handle> = self.root.into_iter().collect();
        while let Some(handle) = stack.pop() {
            out.push(self.entry(handle));
            let node = &self.nodes[handle];
            stack.extend(node.left);
            stack.extend(node.right);
        }
        out.reverse();
        out
    }

    /// Breadth-first, left to right within each level.
    pub fn level_order_traversal(&self) -> Vec<(&K, &V)> {
        let mut out = Vec::with_capacity(self.size);
        let mut queue: VecDeque<Handle> = self.root.into_iter().collect();
        while let Some(handle) = queue.pop_front() {
            out.push(self.entry(handle));
            let node = &self.nodes[handle];
            queue.extend(node.left);
            queue.extend(node.right);
        }
        out
    }

    pub fn keys(&self) -> Vec<&K> {
        self.inorder_traversal().into_iter().map(|(k, _)| k).collect()
    }

    pub fn values(&self) -> Vec<&V> {
        self.inorder_traversal().into_iter().map(|(_, v)| v).collect()
    }

    /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
    pub fn get_height(&self) -> isize {
        let mut height = -1;
        let mut level: Vec<Handle> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|&handle| {
                    let node = &self.nodes[handle];
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        height
    }

    /// Whether every node's subtrees differ in height by at most one.
    ///
    /// Heights are computed bottom-up in a single post-order pass, which stops
    /// at the first unbalanced node.
    pub fn is_balanced(&self) -> bool {
        let mut heights: HashMap<Handle, usize> = HashMap::new();
        let mut stack: Vec<(Handle, bool)> = self.root.map(|h| (h, false)).into_iter().collect();

        while let Some((handle, children_done)) = stack.pop() {
            let node = &self.nodes[handle];
            if !children_done {
                stack.push((handle, true));
                stack.extend(node.right.map(|h| (h, false)));
                stack.extend(node.left.map(|h| (h, false)));
                continue;
            }
            let left = node.left.and_then(|h| heights.remove(&h)).unwrap_or(0);
            let right = node.right.and_then(|h| heights.remove(&h)).unwrap_or(0);
            if left.abs_diff(right) > 1 {
                return false;
            }
            heights.insert(handle, left.max(right) + 1);
        }
        true
    }
}
