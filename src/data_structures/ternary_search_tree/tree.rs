// Copyright (c) 2025 tst_words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The [`TernarySearchTree`] container.

use std::fmt;

use super::iter::Strings;
use super::node::{NodeArena, NodeId};

/// Indent of the root line in the debug dump.
const DUMP_INDENT: &str = "       ";

/// Shape summary of a tree, see [`TernarySearchTree::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of stored strings, the empty string included.
    pub strings: usize,

    /// Number of allocated nodes.
    pub nodes: usize,

    /// Number of nodes at which some string ends.
    pub terminal_nodes: usize,

    /// Length in characters of the longest stored string.
    pub max_depth: usize,
}

/// A set of strings stored as a ternary search tree.
///
/// Each node holds one character and up to three children: a left sibling with
/// a smaller character at the same position, a right sibling with a greater
/// one, and a middle child for the next character. The empty string cannot be
/// represented by a node, so the tree keeps a separate flag for it.
///
/// # Examples
///
/// ```
/// use tst_words_lib::data_structures::ternary_search_tree::TernarySearchTree;
///
/// let mut tree = TernarySearchTree::new();
/// tree.insert("car");
/// tree.insert("cart");
///
/// assert!(tree.search("car", true));
/// assert!(tree.search("ca", false));
/// assert!(!tree.search("ca", true));
/// assert_eq!(tree.all_strings(), vec!["car", "cart"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TernarySearchTree {
    arena: NodeArena,
    root: Option<NodeId>,
    contains_empty_string: bool,
    len: usize,
}

impl TernarySearchTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            contains_empty_string: false,
            len: 0,
        }
    }

    /// Inserts `word` into the tree.
    ///
    /// The empty string is recorded with a flag; any other word allocates at
    /// most one node per character it does not share with stored strings.
    ///
    /// # Returns
    ///
    /// `true` if the word was not stored before, `false` if this insert was a
    /// no-op.
    pub fn insert(&mut self, word: &str) -> bool {
        let fresh = if word.is_empty() {
            !std::mem::replace(&mut self.contains_empty_string, true)
        } else {
            let chars: Vec<char> = word.chars().collect();
            let root = match self.root {
                Some(root) => root,
                None => {
                    let root = self.arena.alloc(chars[0]);
                    self.root = Some(root);
                    root
                }
            };
            self.arena.insert(root, &chars, 0)
        };

        if fresh {
            self.len += 1;
        }
        fresh
    }

    /// Looks `word` up.
    ///
    /// With `exact` the word itself must have been inserted. Without it, the
    /// word only needs to be a prefix of some stored string (a stored string
    /// counts as its own prefix).
    ///
    /// The empty string is a prefix of everything, so `search("", false)` is
    /// `true` even on an empty tree.
    pub fn search(&self, word: &str, exact: bool) -> bool {
        if word.is_empty() {
            return !exact || self.contains_empty_string;
        }
        let Some(root) = self.root else {
            return false;
        };
        let chars: Vec<char> = word.chars().collect();
        self.arena.search(root, &chars, 0, exact)
    }

    /// Returns `true` if `word` itself is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word, true)
    }

    /// Returns `true` if some stored string starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.search(prefix, false)
    }

    /// Returns every stored string in lexicographic order, the empty string
    /// first when it is a member.
    pub fn all_strings(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Number of stored strings.
    ///
    /// Maintained on insert, always equal to `self.all_strings().len()`.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing, not even the empty string, is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes allocated by the tree.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Removes every string and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.contains_empty_string = false;
        self.len = 0;
    }

    /// Lazy iterator over the stored strings, in the same order as
    /// [`all_strings`](Self::all_strings).
    pub fn iter(&self) -> Strings<'_> {
        Strings::new(&self.arena, self.root, self.contains_empty_string)
    }

    /// Lazy iterator over the stored strings that start with `prefix`,
    /// `prefix` itself included when stored.
    pub fn strings_with_prefix(&self, prefix: &str) -> Strings<'_> {
        if prefix.is_empty() {
            return self.iter();
        }
        let chars: Vec<char> = prefix.chars().collect();
        match self.root.and_then(|root| self.arena.find(root, &chars, 0)) {
            Some(end) => Strings::below(&self.arena, end, chars),
            None => Strings::empty(&self.arena),
        }
    }

    /// Computes a [`TreeStats`] summary.
    pub fn stats(&self) -> TreeStats {
        let terminal_nodes = self.arena.nodes().filter(|node| node.is_terminal).count();
        let max_depth = self
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0);

        TreeStats {
            strings: self.len,
            nodes: self.arena.len(),
            terminal_nodes,
            max_depth,
        }
    }

    /// Renders the node structure as an indented dump, one node per line.
    ///
    /// An empty tree renders as `empty tree`. Otherwise the first line gives
    /// the empty-string flag and the following lines each node's character and
    /// terminal flag, with `_lt_:`, `_eq_:` and `_gt_:` marking left, middle
    /// and right children.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TernarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => f.write_str("empty tree"),
            Some(root) => {
                writeln!(f, "terminates: {} ", self.contains_empty_string)?;
                self.arena.write_dump(f, root, DUMP_INDENT)
            }
        }
    }
}

impl<'a> IntoIterator for &'a TernarySearchTree {
    type Item = String;
    type IntoIter = Strings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for TernarySearchTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TernarySearchTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
