//! dirscribe - write a directory's structure to a text file as a tree diagram

pub mod error;
pub mod output;
pub mod prompt;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{
    DEFAULT_OUTPUT_FILE, OutputConfig, StreamingFormatter, render, render_to_file,
    render_to_string, render_to_writer,
};
pub use prompt::{RenderTarget, run_menu};
pub use tree::{SortOrder, StreamingOutput, StreamingWalker, TreeStats, WalkerConfig};
