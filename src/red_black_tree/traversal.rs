use crate::arena::{Arena, Index};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree::{NodeRef, RedBlackTree};
use std::mem;

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct Iter<'a, T> {
    tree: &'a RedBlackTree<T>,
    current: Option<Index>,
    stack: Vec<Index>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>) -> Self {
        Iter {
            tree,
            current: tree.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = tree.arena[index].left;
        }
        self.stack.pop().map(|index| {
            let node = &tree.arena[index];
            self.current = node.right;
            &node.key
        })
    }
}

/// An owning iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned keys, freeing each
/// node as it is visited.
pub struct IntoIter<T> {
    arena: Arena<Node<T>>,
    current: Option<Index>,
    stack: Vec<Index>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.arena[index].left;
        }
        self.stack.pop().map(|index| {
            let node = self.arena.free(index);
            self.current = node.right;
            node.key
        })
    }
}

impl<T> IntoIterator for RedBlackTree<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        let RedBlackTree { arena, root, .. } = self;
        IntoIter {
            arena,
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over node handles in pre-order.
///
/// Each node is yielded before the nodes of its left and right subtrees.
pub struct PreOrder<'a, T> {
    tree: &'a RedBlackTree<T>,
    stack: Vec<Index>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>) -> Self {
        PreOrder {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.stack.pop().map(|index| {
            let node = &tree.arena[index];
            // push right first so the left subtree is visited first
            if let Some(right) = node.right {
                self.stack.push(right);
            }
            if let Some(left) = node.left {
                self.stack.push(left);
            }
            NodeRef { tree, index }
        })
    }
}

/// An iterator over node handles in post-order.
///
/// Each node is yielded after the nodes of its left and right subtrees.
pub struct PostOrder<'a, T> {
    tree: &'a RedBlackTree<T>,
    order: Vec<Index>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>) -> Self {
        // two-stack traversal: one pass discovers nodes in node-right-left order, and popping
        // the discovered list reverses it into left-right-node order
        let mut discovered = tree.root.into_iter().collect::<Vec<_>>();
        let mut order = Vec::new();
        while let Some(index) = discovered.pop() {
            if let Some(left) = tree.arena[index].left {
                discovered.push(left);
            }
            if let Some(right) = tree.arena[index].right {
                discovered.push(right);
            }
            order.push(index);
        }
        PostOrder { tree, order }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.order.pop().map(|index| NodeRef { tree, index })
    }
}

/// An iterator over the levels of a `RedBlackTree<T>`.
///
/// Each step yields the node handles of one level, left to right, starting at the root level.
pub struct LevelOrder<'a, T> {
    tree: &'a RedBlackTree<T>,
    level: Vec<Index>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(tree: &'a RedBlackTree<T>) -> Self {
        LevelOrder {
            tree,
            level: tree.root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = Vec<NodeRef<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.level.is_empty() {
            return None;
        }
        let tree = self.tree;
        let mut next_level = Vec::new();
        for &index in &self.level {
            if let Some(left) = tree.arena[index].left {
                next_level.push(left);
            }
            if let Some(right) = tree.arena[index].right {
                next_level.push(right);
            }
        }
        let current = mem::replace(&mut self.level, next_level);
        Some(
            current
                .into_iter()
                .map(|index| NodeRef { tree, index })
                .collect(),
        )
    }
}
