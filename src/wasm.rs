//! WebAssembly bindings for browser-based tools.
//!
//! This module provides WASM-compatible exports for building an operator
//! trie and scanning input in web browsers and other JavaScript
//! environments.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { matchTokens, exportDot, TokenSet } from './lextrie.js';
//!
//! await init();
//!
//! const set = new TokenSet();
//! set.addToken('<', 1);
//! set.addToken('<=', 2);
//! set.addToken('<<=', 3);
//!
//! const result = JSON.parse(matchTokens('<<=<=', set));
//! console.log(result); // [{lexeme: '<<=', start: 0, end: 3, id: 3}, ...]
//!
//! const dot = exportDot(set); // Graphviz source for the trie
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::builder::TrieBuilder;
use crate::graph::to_dot;
use crate::trie::Trie;

/// A set of token lexemes with numeric identifiers, built from JavaScript.
#[wasm_bindgen]
pub struct TokenSet {
    entries: Vec<(String, u32)>,
}

#[wasm_bindgen]
impl TokenSet {
    /// Create an empty token set.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a token lexeme with its identifier.
    ///
    /// Empty lexemes are ignored. If the same lexeme is registered twice,
    /// the first identifier wins.
    #[wasm_bindgen(js_name = addToken)]
    pub fn add_token(&mut self, text: &str, id: u32) {
        if !text.is_empty() {
            self.entries.push((text.to_string(), id));
        }
    }

    /// Number of registered lexemes.
    #[wasm_bindgen(js_name = tokenCount)]
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

fn build_trie(set: &TokenSet) -> Trie<char, u32> {
    let mut builder = TrieBuilder::new();
    for (text, id) in &set.entries {
        // Empty lexemes were filtered at registration.
        let _ = builder.insert_str(text, *id);
    }
    builder.build()
}

/// A JSON-serializable match result for JavaScript consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsMatch {
    /// The matched text (one character for unmatched spans).
    pub lexeme: String,
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    /// Identifier of the matched token, or absent for unmatched input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

/// Scan `input` against the token set using maximal munch.
///
/// Returns a JSON array of match records. Input with no registered match
/// is reported one character at a time without an `id`.
#[wasm_bindgen(js_name = matchTokens)]
pub fn match_tokens(input: &str, set: &TokenSet) -> String {
    let trie = build_trie(set);
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        if let Some((len, id)) = trie.longest_match_str(rest) {
            matches.push(JsMatch {
                lexeme: rest[..len].to_string(),
                start: pos,
                end: pos + len,
                id: Some(id),
            });
            pos += len;
        } else {
            let skip = rest.chars().next().map_or(1, char::len_utf8);
            matches.push(JsMatch {
                lexeme: rest[..skip].to_string(),
                start: pos,
                end: pos + skip,
                id: None,
            });
            pos += skip;
        }
    }

    serde_json::to_string(&matches).unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}

/// Render the token set's trie as Graphviz DOT source.
#[wasm_bindgen(js_name = exportDot)]
pub fn export_dot(set: &TokenSet) -> String {
    let trie = build_trie(set);
    to_dot(&trie, |c| c.to_string())
}

/// Get the library version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
