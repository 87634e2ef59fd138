//! Directory tree walking logic
//!
//! `StreamingWalker` visits a root depth-first and hands every entry to a
//! `StreamingOutput` sink together with the prefix and sibling position the
//! sink needs to draw it. Nothing is buffered beyond the current path.

mod config;
mod streaming;
mod traversal;

// Re-export public types
pub use config::{SortOrder, WalkerConfig};
pub use streaming::{StreamingOutput, StreamingWalker, TreeStats};
pub use traversal::{BLANK, BRANCH, CONTINUATION, TERMINAL};
