//! Flat node records for the linearized trie.
//!
//! This module defines the fixed-size `Node` record stored by value in a
//! contiguous array, and the `NodeId` index handle used in place of
//! pointers. Because nodes reference each other only by index, the array
//! is relocatable and trivially serializable.

use core::fmt;

/// In-record sentinel for "no node". Kept out of the public API; callers
/// see `Option<NodeId>` instead.
pub(crate) const INVALID: u32 = u32::MAX;

/// Index of a node in the flat array.
///
/// A `NodeId` is only meaningful for the `Trie` whose array it indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Largest index representable (one value is reserved as a sentinel).
    pub(crate) const MAX_INDEX: usize = (u32::MAX - 1) as usize;

    /// Create a node ID from an array index.
    ///
    /// # Panics
    ///
    /// Panics if `index` exceeds the u32 index space.
    pub fn new(index: usize) -> Self {
        assert!(index <= Self::MAX_INDEX, "node index out of range");
        Self(index as u32)
    }

    /// Get the underlying array index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_raw(raw: u32) -> Option<Self> {
        if raw == INVALID { None } else { Some(Self(raw)) }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A trie node in its linearized form.
///
/// Nodes sharing a parent form a *sibling group*: a contiguous run of the
/// array, sorted by `token` with no duplicates. Every member of a group
/// stores the same `group_start`/`group_len`, so any member describes the
/// whole group. The conceptual root is not stored; the root group starts
/// at element 0 and its members have no parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<T, P> {
    /// Parent index, or `INVALID` for the root group.
    pub(crate) parent: u32,
    /// First index of this node's sibling group.
    pub(crate) group_start: u32,
    /// Number of nodes in this node's sibling group.
    pub(crate) group_len: u32,
    /// First index of this node's child group, or `INVALID` for leaves.
    pub(crate) first_child: u32,
    /// Depth of this node's group below the conceptual root (root group is 0).
    pub(crate) level: u32,
    /// The input symbol this node matches.
    pub(crate) token: T,
    /// Payload of the registered sequence terminating here, if any.
    pub(crate) payload: Option<P>,
}

impl<T: Copy, P: Copy> Node<T, P> {
    /// The node's parent, or `None` for members of the root group.
    pub fn parent(&self) -> Option<NodeId> {
        NodeId::from_raw(self.parent)
    }

    /// First node of this node's sibling group.
    pub fn group_start(&self) -> NodeId {
        NodeId(self.group_start)
    }

    /// Size of this node's sibling group.
    pub fn group_len(&self) -> usize {
        self.group_len as usize
    }

    /// First node of this node's child group, or `None` for leaves.
    pub fn first_child(&self) -> Option<NodeId> {
        NodeId::from_raw(self.first_child)
    }

    /// Depth of this node's group below the conceptual root.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The input symbol this node matches.
    pub fn token(&self) -> T {
        self.token
    }

    /// Payload attached to this node, if a registered sequence ends here.
    pub fn payload(&self) -> Option<P> {
        self.payload
    }

    /// Whether a registered sequence terminates at this node.
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.first_child == INVALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<char, u32> {
        Node {
            parent: INVALID,
            group_start: 0,
            group_len: 2,
            first_child: 2,
            level: 0,
            token: '<',
            payload: Some(7),
        }
    }

    #[test]
    fn test_node_id_round_trip() {
        let id = NodeId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "#42");
    }

    #[test]
    fn test_sentinel_maps_to_none() {
        assert_eq!(NodeId::from_raw(INVALID), None);
        assert_eq!(NodeId::from_raw(3), Some(NodeId::new(3)));
    }

    #[test]
    #[should_panic(expected = "node index out of range")]
    fn test_node_id_rejects_sentinel_index() {
        let _ = NodeId::new(u32::MAX as usize);
    }

    #[test]
    fn test_node_accessors() {
        let node = sample();
        assert_eq!(node.parent(), None);
        assert_eq!(node.group_start().index(), 0);
        assert_eq!(node.group_len(), 2);
        assert_eq!(node.first_child(), Some(NodeId::new(2)));
        assert_eq!(node.level(), 0);
        assert_eq!(node.token(), '<');
        assert_eq!(node.payload(), Some(7));
        assert!(node.is_terminal());
        assert!(!node.is_leaf());
    }
}
