//! Builder fuzz target.
//!
//! Feeds arbitrary registration batches through build and checks the
//! structural invariants of the linearized array.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lextrie::{BuildError, TrieBuilder};

#[derive(Debug, Arbitrary)]
struct Batch {
    entries: Vec<(Vec<u8>, u16)>,
}

fuzz_target!(|batch: Batch| {
    let mut builder = TrieBuilder::new();
    for (sequence, payload) in &batch.entries {
        match builder.insert(sequence, *payload) {
            Ok(()) => assert!(!sequence.is_empty()),
            Err(BuildError::EmptySequence) => assert!(sequence.is_empty()),
            Err(BuildError::CapacityExceeded) => return,
        }
    }
    let trie = builder.build();

    // Structural invariants must hold for any batch.
    let nodes = trie.nodes();
    for (i, node) in nodes.iter().enumerate() {
        let start = node.group_start().index();
        let len = node.group_len();
        assert!(start <= i && i < start + len, "node {} outside its group", i);
        assert!(start + len <= nodes.len(), "group at {} out of bounds", start);
        if let Some(parent) = node.parent() {
            assert!(parent.index() < i, "parent link of {} points forward", i);
        }
        if i == start {
            for pair in nodes[start..start + len].windows(2) {
                assert!(pair[0].token() < pair[1].token());
            }
        }
    }

    // Every registered sequence must still traverse.
    for (sequence, _) in &batch.entries {
        if !sequence.is_empty() {
            assert!(trie.traverse(sequence).is_some());
        }
    }
});
