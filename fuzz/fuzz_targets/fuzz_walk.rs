//! Query-side fuzz target.
//!
//! Scans arbitrary UTF-8 input against a fixed operator trie to find
//! panics and invariant violations in the matcher and munch loop.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lextrie::TrieBuilder;

const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "!", "&&", "||", "&", "|",
    "^", "~", "<<", ">>", "<<=", ">>=", "::", "->", "=>", ".", ",", ";",
];

fuzz_target!(|data: &str| {
    let mut builder = TrieBuilder::new();
    for (id, op) in OPERATORS.iter().enumerate() {
        builder.insert_str(op, id as u32).unwrap();
    }
    let trie = builder.build();

    let mut rest = data;
    while !rest.is_empty() {
        match trie.longest_match_str(rest) {
            Some((len, id)) => {
                // A match consumes progress, stays in bounds, and reports
                // the lexeme it claims.
                assert!(len > 0 && len <= rest.len());
                let op = OPERATORS[id as usize];
                assert_eq!(&rest[..len], op);
                rest = &rest[len..];
            }
            None => {
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
        }
    }

    let _ = trie.traverse_str(data);
});
