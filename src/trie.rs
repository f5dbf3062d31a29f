//! The flat trie and its query operations.
//!
//! A `Trie` is an immutable, contiguous array of [`Node`] records produced
//! by [`TrieBuilder::build`](crate::builder::TrieBuilder::build). All
//! query operations take `&self`, perform no allocation, and are safe to
//! call concurrently from any number of readers.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::node::{Node, NodeId, INVALID};

/// Sibling-group size at which lookup switches from an early-exit linear
/// scan to binary search. Both strategies rely on the group being sorted
/// by token.
pub const BINARY_SEARCH_THRESHOLD: usize = 8;

/// Summary counters over a linearized trie, for diagnostics and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrieStats {
    /// Total node count.
    pub nodes: usize,
    /// Number of sibling groups.
    pub groups: usize,
    /// Nodes without children.
    pub leaves: usize,
    /// Payload-bearing nodes (registered sequences).
    pub payloads: usize,
    /// Size of the widest sibling group.
    pub max_group_len: usize,
    /// Deepest level (0 for a trie of single-symbol sequences).
    pub max_level: u32,
}

/// A linearized trie over tokens `T` with payloads `P`.
///
/// # Example
///
/// ```
/// use lextrie::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.insert_str("<", 1u32).unwrap();
/// builder.insert_str("<=", 2).unwrap();
/// builder.insert_str("<<", 3).unwrap();
/// builder.insert_str("<<=", 4).unwrap();
/// let trie = builder.build();
///
/// assert_eq!(trie.payload_of_str("<<="), Some(4));
/// assert_eq!(trie.payload_of_str("<<<"), None);
///
/// // Maximal munch over a scan position: "<<" is the longest
/// // registered prefix of "<<a".
/// assert_eq!(trie.longest_match_str("<<a"), Some((2, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<T, P> {
    nodes: Vec<Node<T, P>>,
}

impl<T: Copy + Ord, P: Copy> Trie<T, P> {
    /// Wrap an existing node array.
    ///
    /// The array must be well-formed, i.e. produced by
    /// [`TrieBuilder::build`](crate::builder::TrieBuilder::build) or
    /// reconstituted unchanged from [`into_nodes`](Self::into_nodes).
    pub fn from_nodes(nodes: Vec<Node<T, P>>) -> Self {
        debug_assert!(nodes
            .iter()
            .all(|n| (n.group_start + n.group_len) as usize <= nodes.len()));
        debug_assert!(nodes
            .iter()
            .all(|n| n.first_child == INVALID || (n.first_child as usize) < nodes.len()));
        Self { nodes }
    }

    /// Unwrap into the underlying node array, e.g. for serialization.
    pub fn into_nodes(self) -> Vec<Node<T, P>> {
        self.nodes
    }

    /// The underlying node array.
    pub fn nodes(&self) -> &[Node<T, P>] {
        &self.nodes
    }

    /// Total node count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the trie contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node addressed by `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds for this trie.
    pub fn node(&self, id: NodeId) -> &Node<T, P> {
        &self.nodes[id.index()]
    }

    /// Find the child of `current` matching `token`.
    ///
    /// `None` as the current position means "not started": the root
    /// sibling group is searched. Returns the matching node's ID, or
    /// `None` when the group holds no such token (an ordinary outcome,
    /// not an error) or when `current` is a leaf.
    pub fn find_next(&self, current: Option<NodeId>, token: T) -> Option<NodeId> {
        let (start, len) = match current {
            None => {
                let root = self.nodes.first()?;
                (root.group_start as usize, root.group_len as usize)
            }
            Some(id) => {
                let node = &self.nodes[id.index()];
                if node.first_child == INVALID {
                    return None;
                }
                let first = node.first_child as usize;
                (first, self.nodes[first].group_len as usize)
            }
        };
        self.search_group(start, len, token)
    }

    /// Search one sibling group for `token`; shared by both strategies.
    fn search_group(&self, start: usize, len: usize, token: T) -> Option<NodeId> {
        let group = &self.nodes[start..start + len];
        if len >= BINARY_SEARCH_THRESHOLD {
            let pos = group.binary_search_by(|n| n.token.cmp(&token)).ok()?;
            Some(NodeId::new(start + pos))
        } else {
            for (offset, node) in group.iter().enumerate() {
                match node.token.cmp(&token) {
                    Ordering::Equal => return Some(NodeId::new(start + offset)),
                    // Sorted group: nothing beyond this point can match.
                    Ordering::Greater => return None,
                    Ordering::Less => {}
                }
            }
            None
        }
    }

    /// Walk `sequence` from the root, returning the node reached by
    /// consuming every token.
    ///
    /// Returns `None` for an empty sequence or at the first token with no
    /// matching child (no further tokens are consumed). This performs no
    /// backtracking; use [`longest_match`](Self::longest_match) for
    /// maximal-munch scanning.
    pub fn traverse(&self, sequence: &[T]) -> Option<NodeId> {
        if sequence.is_empty() {
            return None;
        }
        let mut current = None;
        for &token in sequence {
            current = Some(self.find_next(current, token)?);
        }
        current
    }

    /// Payload registered for exactly `sequence`, if any.
    pub fn payload_of(&self, sequence: &[T]) -> Option<P> {
        self.traverse(sequence)
            .and_then(|id| self.nodes[id.index()].payload)
    }

    /// Longest registered prefix of `input` (maximal munch).
    ///
    /// Walks `input` greedily, remembering the deepest payload-bearing
    /// node passed, and returns the number of tokens that prefix spans
    /// plus its payload. A scanner resumes at `&input[len..]`.
    pub fn longest_match(&self, input: &[T]) -> Option<(usize, P)> {
        let mut current = None;
        let mut best = None;
        for (walked, &token) in input.iter().enumerate() {
            let Some(next) = self.find_next(current, token) else {
                break;
            };
            if let Some(payload) = self.nodes[next.index()].payload {
                best = Some((walked + 1, payload));
            }
            current = Some(next);
        }
        best
    }

    /// Visit the tokens on the path from `start` back to the root.
    ///
    /// Tokens are produced in reverse order (deepest first); collect and
    /// reverse for the forward sequence, or use
    /// [`sequence_of`](Self::sequence_of).
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of bounds for this trie.
    pub fn backtrace<F>(&self, start: NodeId, mut visit: F)
    where
        F: FnMut(T),
    {
        let mut current = Some(start);
        while let Some(id) = current {
            let node = &self.nodes[id.index()];
            visit(node.token);
            current = node.parent();
        }
    }

    /// The full token sequence leading to `node`, in forward order.
    pub fn sequence_of(&self, node: NodeId) -> Vec<T> {
        let mut tokens = Vec::new();
        self.backtrace(node, |t| tokens.push(t));
        tokens.reverse();
        tokens
    }

    /// Compute summary counters in one read-only pass.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            nodes: self.nodes.len(),
            ..TrieStats::default()
        };
        for (i, node) in self.nodes.iter().enumerate() {
            if i == node.group_start as usize {
                stats.groups += 1;
                stats.max_group_len = stats.max_group_len.max(node.group_len as usize);
            }
            if node.first_child == INVALID {
                stats.leaves += 1;
            }
            if node.payload.is_some() {
                stats.payloads += 1;
            }
            stats.max_level = stats.max_level.max(node.level);
        }
        stats
    }
}

impl<P: Copy> Trie<char, P> {
    /// [`traverse`](Self::traverse) over a string slice.
    pub fn traverse_str(&self, sequence: &str) -> Option<NodeId> {
        if sequence.is_empty() {
            return None;
        }
        let mut current = None;
        for c in sequence.chars() {
            current = Some(self.find_next(current, c)?);
        }
        current
    }

    /// Payload registered for exactly `sequence`, if any.
    pub fn payload_of_str(&self, sequence: &str) -> Option<P> {
        self.traverse_str(sequence)
            .and_then(|id| self.nodes[id.index()].payload)
    }

    /// Longest registered prefix of `input`, scanning the string slice
    /// directly with no allocation.
    ///
    /// Returns the matched length in *bytes*, so a scanner can resume at
    /// `&input[len..]`.
    pub fn longest_match_str(&self, input: &str) -> Option<(usize, P)> {
        let mut current = None;
        let mut best = None;
        let mut walked = 0;
        for c in input.chars() {
            let Some(next) = self.find_next(current, c) else {
                break;
            };
            walked += c.len_utf8();
            if let Some(payload) = self.nodes[next.index()].payload {
                best = Some((walked, payload));
            }
            current = Some(next);
        }
        best
    }
}
