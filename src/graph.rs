//! Graphviz export of a linearized trie.
//!
//! Purely diagnostic: renders the flat node array as a DOT digraph for
//! visualization, with one visual node per array element, levels pinned to
//! the same rank, and one edge per parent-to-child-group link. Has no
//! coupling to the matching logic.

use alloc::string::String;
use core::fmt::Write;

use crate::trie::Trie;

/// Render `trie` as a Graphviz DOT digraph.
///
/// `label` converts each token to display text; payload-bearing nodes are
/// drawn with a doubled outline. The conceptual root appears as a point
/// node with an edge into the root sibling group.
///
/// # Example
///
/// ```
/// use lextrie::{to_dot, TrieBuilder};
///
/// let mut builder = TrieBuilder::new();
/// builder.insert_str("<=", 2u32).unwrap();
/// let dot = to_dot(&builder.build(), |c| c.into());
/// assert!(dot.starts_with("digraph trie {"));
/// ```
pub fn to_dot<T, P, F>(trie: &Trie<T, P>, mut label: F) -> String
where
    T: Copy + Ord,
    P: Copy,
    F: FnMut(T) -> String,
{
    let nodes = trie.nodes();
    let mut out = String::new();
    let _ = writeln!(out, "digraph trie {{");
    let _ = writeln!(out, "    rankdir=LR;");
    let _ = writeln!(out, "    node [shape=circle, fontsize=10];");
    let _ = writeln!(out, "    root [shape=point];");

    for (i, node) in nodes.iter().enumerate() {
        let _ = write!(out, "    n{} [label=\"{}\"", i, escape(&label(node.token())));
        if node.is_terminal() {
            out.push_str(", peripheries=2");
        }
        let _ = writeln!(out, "];");
    }

    // Pin each level to one rank so sibling groups line up.
    if let Some(max_level) = nodes.iter().map(|n| n.level()).max() {
        for level in 0..=max_level {
            let _ = write!(out, "    {{ rank=same;");
            for (i, _) in nodes.iter().enumerate().filter(|(_, n)| n.level() == level) {
                let _ = write!(out, " n{};", i);
            }
            let _ = writeln!(out, " }}");
        }
    }

    // One edge per parent -> child-group link; the root group always
    // starts at element 0.
    if !nodes.is_empty() {
        let _ = writeln!(out, "    root -> n0;");
    }
    for (i, node) in nodes.iter().enumerate() {
        if let Some(child) = node.first_child() {
            let _ = writeln!(out, "    n{} -> n{};", i, child.index());
        }
    }

    let _ = writeln!(out, "}}");
    out
}

/// Escape a label for a double-quoted DOT string.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
