// Copyright (c) 2025 tst_words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered enumeration of stored strings.

use std::iter::FusedIterator;

use super::node::{NodeArena, NodeId};

/// Pending work for the traversal.
///
/// Every step carries the depth `d` of the node it refers to; when the step is
/// popped, `prefix[..d]` holds the path leading to that node.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Expand a node whose path is already in `prefix[..depth]`.
    Visit { id: NodeId, depth: usize },
    /// Middle child: commit the parent's `ch` at `prefix[depth]` first.
    Descend { id: NodeId, depth: usize, ch: char },
    /// Yield `prefix[..depth]` followed by the node's own character.
    Emit { id: NodeId, depth: usize },
}

/// Iterator over the strings of a [`TernarySearchTree`](super::TernarySearchTree)
/// in lexicographic order.
///
/// Nodes are visited left subtree first, then the node's own string, then the
/// middle subtree, then the right subtree. That order sorts by character at
/// each position and places a string before its extensions.
#[derive(Debug, Clone)]
pub struct Strings<'a> {
    arena: &'a NodeArena,
    stack: Vec<Step>,
    prefix: Vec<char>,
    /// The empty string comes out first when it is a member.
    pending_empty: bool,
}

impl<'a> Strings<'a> {
    /// Iterates the whole tree.
    pub(crate) fn new(arena: &'a NodeArena, root: Option<NodeId>, contains_empty: bool) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = root {
            stack.push(Step::Visit { id: root, depth: 0 });
        }
        Self {
            arena,
            stack,
            prefix: Vec::new(),
            pending_empty: contains_empty,
        }
    }

    /// Iterates the strings that extend `prefix`, whose last character was
    /// found at node `end`. The prefix itself is yielded first when stored.
    pub(crate) fn below(arena: &'a NodeArena, end: NodeId, prefix: Vec<char>) -> Self {
        debug_assert!(!prefix.is_empty(), "prefix iteration needs a non-empty prefix");

        let depth = prefix.len();
        let node = arena.get(end);
        let mut stack = Vec::with_capacity(2);
        if let Some(middle) = node.middle {
            stack.push(Step::Visit { id: middle, depth });
        }
        if node.is_terminal {
            stack.push(Step::Emit { id: end, depth: depth - 1 });
        }
        Self {
            arena,
            stack,
            prefix,
            pending_empty: false,
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty(arena: &'a NodeArena) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            prefix: Vec::new(),
            pending_empty: false,
        }
    }

    fn expand(&mut self, id: NodeId, depth: usize) {
        let node = self.arena.get(id);

        // Pushed in reverse so that pops run left, self, middle, right.
        if let Some(right) = node.right {
            self.stack.push(Step::Visit { id: right, depth });
        }
        if let Some(middle) = node.middle {
            self.stack.push(Step::Descend {
                id: middle,
                depth,
                ch: node.ch,
            });
        }
        if node.is_terminal {
            self.stack.push(Step::Emit { id, depth });
        }
        if let Some(left) = node.left {
            self.stack.push(Step::Visit { id: left, depth });
        }
    }
}

impl Iterator for Strings<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some(String::new());
        }

        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit { id, depth } => self.expand(id, depth),
                Step::Descend { id, depth, ch } => {
                    self.prefix.truncate(depth);
                    self.prefix.push(ch);
                    self.expand(id, depth + 1);
                }
                Step::Emit { id, depth } => {
                    let mut word: String = self.prefix[..depth].iter().collect();
                    word.push(self.arena.get(id).ch);
                    return Some(word);
                }
            }
        }

        None
    }
}

impl FusedIterator for Strings<'_> {}
