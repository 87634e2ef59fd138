//! Output configuration types

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "structure.md";

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Append `/` to directory names.
    pub mark_dirs: bool,
}
