//! Tree formatting and file output
//!
//! - `config` - Output configuration types
//! - `streaming` - Line formatter that implements `StreamingOutput` over any writer
//!
//! The `render*` functions wire a `StreamingWalker` to a `StreamingFormatter`.

mod config;
mod streaming;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, TreeError};
use crate::tree::{StreamingWalker, TreeStats, WalkerConfig};

// Re-export public types and functions
pub use config::{DEFAULT_OUTPUT_FILE, OutputConfig};
pub use streaming::StreamingFormatter;

/// Render the tree of `root` into `output_path` with default settings.
pub fn render(root: &Path, output_path: &Path) -> Result<TreeStats> {
    render_to_file(
        root,
        output_path,
        WalkerConfig::default(),
        OutputConfig::default(),
    )
}

/// Render the tree of `root` into `output_path`.
///
/// The root is validated before the output file is created, so a bad root
/// never leaves an empty file behind. The output file is created before the
/// walk starts; if it lives inside `root` it shows up in its own listing.
pub fn render_to_file(
    root: &Path,
    output_path: &Path,
    walker_config: WalkerConfig,
    output_config: OutputConfig,
) -> Result<TreeStats> {
    let walker = StreamingWalker::new(walker_config);
    walker.validate_root(root)?;

    let file = File::create(output_path).map_err(|source| TreeError::OutputWriteFailure {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut formatter = StreamingFormatter::new(output_config, BufWriter::new(file));
    let stats = walker
        .walk_validated(root, &mut formatter)
        .map_err(|e| e.with_output_path(output_path))?;

    info!(
        root = %root.display(),
        output = %output_path.display(),
        directories = stats.directories,
        files = stats.files,
        "wrote tree structure"
    );
    Ok(stats)
}

/// Render the tree of `root` to an arbitrary writer.
pub fn render_to_writer<W: Write>(
    root: &Path,
    out: W,
    walker_config: WalkerConfig,
    output_config: OutputConfig,
) -> Result<TreeStats> {
    let mut formatter = StreamingFormatter::new(output_config, out);
    StreamingWalker::new(walker_config).walk_streaming(root, &mut formatter)
}

/// Render the tree of `root` into a string.
pub fn render_to_string(
    root: &Path,
    walker_config: WalkerConfig,
    output_config: OutputConfig,
) -> Result<String> {
    let mut buf = Vec::new();
    render_to_writer(root, &mut buf, walker_config, output_config)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
