//! # Lextrie
//!
//! A compact, flat-array trie for multi-character token matching.
//!
//! This library provides the fixed-token recognition engine of a lexer:
//! given a pre-registered set of symbol sequences (operator lexemes such
//! as `<`, `<=`, `<<=`), it finds which sequence matches at the current
//! scan position by longest/greedy prefix walking, and returns the opaque
//! payload registered for it. The linearized trie is a single contiguous
//! array of index-linked records, so matching needs no pointer chasing,
//! no allocation, and the structure is relocatable and trivially
//! serializable, which suits embedded as well as desktop tokenizers.
//!
//! ## Features
//!
//! - **Flat storage**: nodes are fixed-size records in one array,
//!   addressed by index; sibling groups are contiguous and sorted.
//! - **Adaptive lookup**: binary search in wide sibling groups, early-exit
//!   linear scan in narrow ones.
//! - **Allocation-free matching**: every query operation takes `&self`
//!   and allocates nothing; concurrent readers are safe.
//! - **Maximal munch**: a longest-match helper for scanner loops, kept
//!   separate from the plain walker.
//! - **Back-tracing**: reconstruct a matched sequence from its node by
//!   following parent links.
//! - **Graph export**: render a trie as a Graphviz digraph for debugging.
//! - **Zero dependencies**: the core uses only the standard library.
//! - **`no_std` support**: builds in embedded environments with `alloc`.
//! - **WebAssembly support**: optional bindings for browser-based tools.
//!
//! ## `no_std` Support
//!
//! By default the `std` feature is enabled. To use in a `no_std`
//! environment with an allocator:
//!
//! ```toml
//! [dependencies]
//! lextrie = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use lextrie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert_str("<", 1u32).unwrap();
//! builder.insert_str("<=", 2).unwrap();
//! builder.insert_str("<<", 3).unwrap();
//! builder.insert_str("<<=", 4).unwrap();
//! let trie = builder.build();
//!
//! assert_eq!(trie.payload_of_str("<<="), Some(4));
//! assert_eq!(trie.payload_of_str("<<<"), None);
//! ```
//!
//! ## Scanning with Maximal Munch
//!
//! The walker itself never backtracks; a scanner drives it through
//! [`Trie::longest_match_str`], which remembers the deepest
//! payload-bearing node and reports how much input the match consumed:
//!
//! ```rust
//! use lextrie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert_str("<", 1u32).unwrap();
//! builder.insert_str("<<", 2).unwrap();
//! builder.insert_str("<<=", 3).unwrap();
//! let trie = builder.build();
//!
//! let mut input = "<<=<<x";
//! let mut matched = Vec::new();
//! while let Some((len, payload)) = trie.longest_match_str(input) {
//!     matched.push(payload);
//!     input = &input[len..];
//! }
//! assert_eq!(matched, vec![3, 2]);
//! assert_eq!(input, "x");
//! ```
//!
//! ## Arbitrary Token Types
//!
//! The trie is generic over any ordered `Copy` token, not just `char`;
//! a tokenizer working on pre-tokenized units or raw bytes plugs in the
//! same way:
//!
//! ```rust
//! use lextrie::TrieBuilder;
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert(b"\r\n", 0u8).unwrap();
//! builder.insert(b"\n", 1).unwrap();
//! let trie = builder.build();
//! assert_eq!(trie.longest_match(b"\r\n\n"), Some((2, 0)));
//! ```
//!
//! ## Graph Export
//!
//! ```rust
//! use lextrie::{to_dot, TrieBuilder};
//!
//! let mut builder = TrieBuilder::new();
//! builder.insert_str("->", 7u32).unwrap();
//! let dot = to_dot(&builder.build(), |c| c.into());
//! assert!(dot.contains("digraph trie"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules (no allocation required)
pub mod error;
pub mod node;

// Construction and querying (requires alloc for the node array)
#[cfg(feature = "alloc")]
pub mod builder;
#[cfg(feature = "alloc")]
pub mod graph;
#[cfg(feature = "alloc")]
pub mod trie;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use error::BuildError;
pub use node::{Node, NodeId};

#[cfg(feature = "alloc")]
pub use builder::TrieBuilder;
#[cfg(feature = "alloc")]
pub use graph::to_dot;
#[cfg(feature = "alloc")]
pub use trie::{Trie, TrieStats, BINARY_SEARCH_THRESHOLD};
