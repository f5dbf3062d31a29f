//! Build-time error types.
//!
//! Errors here can only arise while registering sequences. Query-time
//! "no match" is an ordinary `None`, never an error.

use core::fmt;

/// An error raised while registering sequences into a trie builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// An empty sequence was passed to `insert`; there is no path to
    /// register.
    EmptySequence,
    /// The trie outgrew the u32 index space used by the flat array.
    CapacityExceeded,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptySequence => write!(f, "cannot register an empty sequence"),
            BuildError::CapacityExceeded => write!(f, "trie exceeds the u32 node index space"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
