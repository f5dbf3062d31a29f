//! Trie construction and linearization.
//!
//! `TrieBuilder` accumulates registered sequences in an arena of tree
//! nodes, then `build` linearizes the tree into the flat, index-addressed
//! array served by `Trie`. The builder is scratch state: it is consumed by
//! `build` and there is no incremental update of a finished trie; adding
//! a sequence later means rebuilding from scratch.

use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::BuildError;
use crate::node::{Node, NodeId, INVALID};
use crate::trie::Trie;

/// A builder-side tree node: a sorted symbol-to-child association plus the
/// payload of any sequence terminating here.
struct BuildNode<T, P> {
    /// Children sorted by token, unique per token.
    children: Vec<(T, usize)>,
    payload: Option<P>,
}

impl<T, P> BuildNode<T, P> {
    fn new() -> Self {
        Self {
            children: Vec::new(),
            payload: None,
        }
    }
}

/// Builder for a [`Trie`].
///
/// Sequences are registered one at a time with [`insert`](Self::insert);
/// [`build`](Self::build) consumes the builder and produces the immutable
/// flat trie.
///
/// # Example
///
/// ```
/// use lextrie::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.insert_str("<", 1u32).unwrap();
/// builder.insert_str("<=", 2).unwrap();
/// let trie = builder.build();
///
/// assert_eq!(trie.payload_of_str("<="), Some(2));
/// assert_eq!(trie.payload_of_str(">"), None);
/// ```
pub struct TrieBuilder<T, P> {
    /// Node arena; element 0 is the conceptual root.
    arena: Vec<BuildNode<T, P>>,
    /// Number of distinct payload-bearing paths registered so far.
    sequences: usize,
}

impl<T: Copy + Ord, P: Copy> TrieBuilder<T, P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            arena: vec![BuildNode::new()],
            sequences: 0,
        }
    }

    /// Number of tree nodes created so far (excluding the root).
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    /// Whether no sequence has created any node yet.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 1
    }

    /// Number of distinct registered sequences.
    pub fn sequences(&self) -> usize {
        self.sequences
    }

    /// Register `sequence` with the given payload.
    ///
    /// Walks the tree one symbol at a time, creating nodes as needed. If
    /// the exact path is already registered with a payload, the first
    /// registration wins and the new payload is ignored.
    ///
    /// # Errors
    ///
    /// - [`BuildError::EmptySequence`] if `sequence` is empty.
    /// - [`BuildError::CapacityExceeded`] if the trie outgrows the u32
    ///   index space of the flat array.
    pub fn insert(&mut self, sequence: &[T], payload: P) -> Result<(), BuildError> {
        if sequence.is_empty() {
            return Err(BuildError::EmptySequence);
        }

        let mut node = 0usize;
        for &token in sequence {
            let found = self.arena[node]
                .children
                .binary_search_by(|&(t, _)| t.cmp(&token));
            node = match found {
                Ok(pos) => self.arena[node].children[pos].1,
                Err(pos) => {
                    if self.arena.len() - 1 > NodeId::MAX_INDEX {
                        return Err(BuildError::CapacityExceeded);
                    }
                    let child = self.arena.len();
                    self.arena.push(BuildNode::new());
                    self.arena[node].children.insert(pos, (token, child));
                    child
                }
            };
        }

        // First registration wins; a later payload for the same path is
        // left unapplied.
        if self.arena[node].payload.is_none() {
            self.arena[node].payload = Some(payload);
            self.sequences += 1;
        }
        Ok(())
    }

    /// Linearize the tree into a flat [`Trie`], consuming the builder.
    ///
    /// Two breadth-first passes over the arena: the first assigns every
    /// node its output index in level order, the second emits the records.
    /// Level order guarantees each sibling group lands contiguously and
    /// after its parent, which is what makes `group_start`/`group_len`
    /// describe a valid sub-range.
    pub fn build(self) -> Trie<T, P> {
        let count = self.arena.len() - 1;

        // Pass 1: assign flat indices in level-order visitation.
        let mut index = vec![0u32; self.arena.len()];
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(count);
        let mut next = 0u32;
        queue.push_back(0);
        while let Some(id) = queue.pop_front() {
            for &(_, child) in &self.arena[id].children {
                index[child] = next;
                next += 1;
                queue.push_back(child);
            }
        }
        debug_assert_eq!(next as usize, count);

        // Pass 2: same order, emit one record per node. Queue items carry
        // (arena id, flat parent index, level of the children's group).
        let mut nodes: Vec<Node<T, P>> = Vec::with_capacity(count);
        let mut queue: VecDeque<(usize, u32, u32)> = VecDeque::with_capacity(count);
        queue.push_back((0, INVALID, 0));
        while let Some((id, parent, level)) = queue.pop_front() {
            let children = &self.arena[id].children;
            if children.is_empty() {
                continue;
            }
            let group_start = index[children[0].1];
            let group_len = children.len() as u32;
            for &(token, child) in children {
                // Emission order must coincide with pass-1 assignment.
                debug_assert_eq!(nodes.len() as u32, index[child]);
                let entry = &self.arena[child];
                let first_child = match entry.children.first() {
                    Some(&(_, grandchild)) => index[grandchild],
                    None => INVALID,
                };
                nodes.push(Node {
                    parent,
                    group_start,
                    group_len,
                    first_child,
                    level,
                    token,
                    payload: entry.payload,
                });
                queue.push_back((child, index[child], level + 1));
            }
        }

        Trie::from_nodes(nodes)
    }
}

impl<P: Copy> TrieBuilder<char, P> {
    /// Register a sequence given as a string slice.
    ///
    /// Equivalent to [`insert`](Self::insert) over the string's `char`s.
    pub fn insert_str(&mut self, sequence: &str, payload: P) -> Result<(), BuildError> {
        let tokens: Vec<char> = sequence.chars().collect();
        self.insert(&tokens, payload)
    }
}

impl<T: Copy + Ord, P: Copy> Default for TrieBuilder<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_empty_sequence_fails() {
        let mut builder: TrieBuilder<char, u32> = TrieBuilder::new();
        assert_eq!(builder.insert(&[], 1), Err(BuildError::EmptySequence));
        assert!(builder.is_empty());
    }

    #[test]
    fn test_insert_shares_prefixes() {
        let mut builder = TrieBuilder::new();
        builder.insert_str("<", 1u32).unwrap();
        builder.insert_str("<=", 2).unwrap();
        builder.insert_str("<<", 3).unwrap();
        builder.insert_str("<<=", 4).unwrap();

        // '<' is shared by all four paths; each longer lexeme adds one node.
        assert_eq!(builder.len(), 4);
        assert_eq!(builder.sequences(), 4);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut builder = TrieBuilder::new();
        builder.insert_str("==", 10u32).unwrap();
        builder.insert_str("==", 20).unwrap();
        assert_eq!(builder.sequences(), 1);

        let trie = builder.build();
        assert_eq!(trie.payload_of_str("=="), Some(10));
    }

    #[test]
    fn test_build_empty() {
        let builder: TrieBuilder<char, u32> = TrieBuilder::new();
        let trie = builder.build();
        assert!(trie.is_empty());
        assert_eq!(trie.traverse(&['x']), None);
    }

    #[test]
    fn test_linearized_root_group() {
        let mut builder = TrieBuilder::new();
        builder.insert_str("b", 1u32).unwrap();
        builder.insert_str("a", 2).unwrap();
        builder.insert_str("c", 3).unwrap();

        let trie = builder.build();
        let nodes = trie.nodes();
        assert_eq!(nodes.len(), 3);

        // Root group is sorted by token regardless of insertion order.
        let tokens: Vec<char> = nodes.iter().map(|n| n.token()).collect();
        assert_eq!(tokens, vec!['a', 'b', 'c']);
        for node in nodes {
            assert_eq!(node.parent(), None);
            assert_eq!(node.group_start().index(), 0);
            assert_eq!(node.group_len(), 3);
            assert_eq!(node.level(), 0);
            assert!(node.is_leaf());
        }
    }

    #[test]
    fn test_linearized_levels_and_parents() {
        let mut builder = TrieBuilder::new();
        builder.insert_str("ab", 1u32).unwrap();
        builder.insert_str("ac", 2).unwrap();

        let trie = builder.build();
        let nodes = trie.nodes();
        assert_eq!(nodes.len(), 3);

        // Level order: 'a' first, then its children 'b', 'c'.
        assert_eq!(nodes[0].token(), 'a');
        assert_eq!(nodes[0].level(), 0);
        assert_eq!(nodes[0].first_child(), Some(NodeId::new(1)));
        assert_eq!(nodes[1].token(), 'b');
        assert_eq!(nodes[2].token(), 'c');
        for child in &nodes[1..] {
            assert_eq!(child.parent(), Some(NodeId::new(0)));
            assert_eq!(child.group_start().index(), 1);
            assert_eq!(child.group_len(), 2);
            assert_eq!(child.level(), 1);
        }
    }

    #[test]
    fn test_duplicate_insert_same_payload_counted_once() {
        let mut builder = TrieBuilder::new();
        builder.insert_str("->", 7u32).unwrap();
        builder.insert_str("->", 7).unwrap();
        assert_eq!(builder.sequences(), 1);
        assert_eq!(builder.len(), 2);
    }
}
