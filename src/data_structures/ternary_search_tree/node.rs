// Copyright (c) 2025 tst_words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the ternary search tree.
//!
//! Nodes live in a [`NodeArena`] and refer to their children by [`NodeId`]
//! instead of owning them directly. Every node-level operation (insert, search,
//! lookup and the debug dump) is a method on the arena that starts from a given
//! node and walks with an explicit loop or stack, so a very long word never
//! grows the native call stack.

use std::cmp::Ordering;
use std::fmt::{self, Write};

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// The three child slots of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    /// Siblings whose character at this position is smaller.
    Left,
    /// Continuations that share this character, keyed on the next one.
    Middle,
    /// Siblings whose character at this position is greater.
    Right,
}

/// A single character position in the tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// The character this node discriminates on. Never changes after creation.
    pub(crate) ch: char,

    /// Whether some stored string ends exactly at this node.
    pub(crate) is_terminal: bool,

    pub(crate) left: Option<NodeId>,
    pub(crate) middle: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    /// Creates a non-terminal leaf holding `ch`.
    pub(crate) fn new(ch: char) -> Self {
        Self {
            ch,
            is_terminal: false,
            left: None,
            middle: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn child(&self, branch: Branch) -> Option<NodeId> {
        match branch {
            Branch::Left => self.left,
            Branch::Middle => self.middle,
            Branch::Right => self.right,
        }
    }

    #[inline]
    fn child_slot(&mut self, branch: Branch) -> &mut Option<NodeId> {
        match branch {
            Branch::Left => &mut self.left,
            Branch::Middle => &mut self.middle,
            Branch::Right => &mut self.right,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "char: {}, terminates: {}", self.ch, self.is_terminal)
    }
}

/// Owner of every node in a tree.
///
/// Nodes are only ever appended, so a [`NodeId`] handed out by
/// [`NodeArena::alloc`] stays valid for the lifetime of the arena.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Appends a fresh non-terminal node holding `ch`.
    pub(crate) fn alloc(&mut self, ch: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(ch));
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns the child of `parent` on `branch`, creating it with `ch` if absent.
    fn child_or_alloc(&mut self, parent: NodeId, branch: Branch, ch: char) -> NodeId {
        if let Some(child) = self.get(parent).child(branch) {
            return child;
        }
        let child = self.alloc(ch);
        *self.get_mut(parent).child_slot(branch) = Some(child);
        child
    }

    /// Inserts `word[index..]` into the subtree rooted at `start`.
    ///
    /// Left and right moves keep the same index because they are siblings at the
    /// same character position; a middle move advances to the next character.
    ///
    /// Returns `true` if the terminal flag was newly set, i.e. the word was
    /// not stored before.
    pub(crate) fn insert(&mut self, start: NodeId, word: &[char], mut index: usize) -> bool {
        debug_assert!(index < word.len(), "insert index past end of word");

        let mut current = start;
        loop {
            let ch = word[index];
            match ch.cmp(&self.get(current).ch) {
                Ordering::Less => current = self.child_or_alloc(current, Branch::Left, ch),
                Ordering::Greater => current = self.child_or_alloc(current, Branch::Right, ch),
                Ordering::Equal if index + 1 < word.len() => {
                    index += 1;
                    current = self.child_or_alloc(current, Branch::Middle, word[index]);
                }
                Ordering::Equal => {
                    let node = self.get_mut(current);
                    let fresh = !node.is_terminal;
                    node.is_terminal = true;
                    return fresh;
                }
            }
        }
    }

    /// Walks `word[index..]` from `start` and returns the node its last
    /// character lands on, or `None` as soon as a required child is missing.
    pub(crate) fn find(&self, start: NodeId, word: &[char], mut index: usize) -> Option<NodeId> {
        debug_assert!(index < word.len(), "search index past end of word");

        let mut current = start;
        loop {
            let node = self.get(current);
            let ch = word[index];
            current = match ch.cmp(&node.ch) {
                Ordering::Less => node.left?,
                Ordering::Greater => node.right?,
                Ordering::Equal if index + 1 < word.len() => {
                    index += 1;
                    node.middle?
                }
                Ordering::Equal => return Some(current),
            };
        }
    }

    /// Membership test for `word[index..]` below `start`.
    ///
    /// With `exact` the word must end at a terminal node; otherwise reaching
    /// the node of its last character is enough.
    pub(crate) fn search(&self, start: NodeId, word: &[char], index: usize, exact: bool) -> bool {
        match self.find(start, word, index) {
            Some(end) if exact => self.get(end).is_terminal,
            Some(_) => true,
            None => false,
        }
    }

    /// Writes the indented dump of the subtree rooted at `start`.
    ///
    /// Each child line is labelled `_lt_:`, `_eq_:` or `_gt_:` and indented two
    /// spaces deeper than its parent.
    pub(crate) fn write_dump<W: Write>(&self, out: &mut W, start: NodeId, indent: &str) -> fmt::Result {
        let mut stack: Vec<(NodeId, Option<&'static str>, usize)> = vec![(start, None, 0)];

        while let Some((id, label, depth)) = stack.pop() {
            let node = self.get(id);
            if let Some(label) = label {
                write!(out, "\n{label}")?;
            }
            write!(out, "{indent}{:width$}{node}", "", width = depth * 2)?;

            for (branch, label) in [
                (Branch::Right, "_gt_:"),
                (Branch::Middle, "_eq_:"),
                (Branch::Left, "_lt_:"),
            ] {
                if let Some(child) = node.child(branch) {
                    stack.push((child, Some(label), depth + 1));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn arena_with(words: &[&str]) -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let first = chars(words[0]);
        let root = arena.alloc(first[0]);
        for word in words {
            arena.insert(root, &chars(word), 0);
        }
        (arena, root)
    }

    #[test]
    fn test_insert_creates_one_node_per_new_position() {
        let (arena, _) = arena_with(&["cat"]);
        assert_eq!(arena.len(), 3);

        // "car" shares "ca" and adds a sibling of 't'
        let (arena, _) = arena_with(&["cat", "car"]);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_insert_reports_freshness() {
        let mut arena = NodeArena::new();
        let root = arena.alloc('a');
        assert!(arena.insert(root, &chars("ab"), 0));
        assert!(!arena.insert(root, &chars("ab"), 0));
        assert!(arena.insert(root, &chars("a"), 0));
    }

    #[test]
    fn test_siblings_keep_bst_order() {
        let (arena, root) = arena_with(&["m", "c", "x", "a"]);
        let root_node = arena.get(root);
        assert_eq!(root_node.ch, 'm');

        let left = arena.get(root_node.left.unwrap());
        let right = arena.get(root_node.right.unwrap());
        assert_eq!(left.ch, 'c');
        assert_eq!(right.ch, 'x');
        assert_eq!(arena.get(left.left.unwrap()).ch, 'a');
        assert!(root_node.middle.is_none());
    }

    #[test]
    fn test_search_exact_and_prefix() {
        let (arena, root) = arena_with(&["car"]);
        assert!(arena.search(root, &chars("car"), 0, true));
        assert!(arena.search(root, &chars("ca"), 0, false));
        assert!(!arena.search(root, &chars("ca"), 0, true));
        assert!(!arena.search(root, &chars("cart"), 0, false));
        assert!(!arena.search(root, &chars("b"), 0, false));
    }

    #[test]
    fn test_find_returns_last_char_node() {
        let (arena, root) = arena_with(&["bat", "ball"]);
        let end = arena.find(root, &chars("bal"), 0).unwrap();
        assert_eq!(arena.get(end).ch, 'l');
        assert!(!arena.get(end).is_terminal);
        assert!(arena.find(root, &chars("bz"), 0).is_none());
    }

    #[test]
    fn test_dump_layout() {
        let (arena, root) = arena_with(&["b", "a", "bc"]);
        let mut out = String::new();
        arena.write_dump(&mut out, root, "       ").unwrap();

        let expected = "       char: b, terminates: true\n\
                        _lt_:         char: a, terminates: true\n\
                        _eq_:         char: c, terminates: true";
        assert_eq!(out, expected);
    }
}
