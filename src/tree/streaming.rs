//! StreamingWalker - streams output without building full tree in memory

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;
use super::traversal::BaseTraversal;

/// Directory and file counts beneath the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> std::io::Result<()>;

    fn finish(&mut self, stats: TreeStats) -> std::io::Result<()>;
}

/// Streaming tree walker that outputs directly without building tree in memory.
/// Uses O(depth) memory for the prefix and the ancestor chain.
pub struct StreamingWalker {
    config: WalkerConfig,
}

impl StreamingWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Check that `root` can be walked without emitting anything.
    pub fn validate_root(&self, root: &Path) -> Result<()> {
        BaseTraversal::new(&self.config).validate_root(root)
    }

    /// Walk `root` depth-first, streaming every entry to `output`.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<TreeStats> {
        self.validate_root(root)?;
        self.walk_validated(root, output)
    }

    /// Same as `walk_streaming` for a root already checked by `validate_root`.
    pub(crate) fn walk_validated<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<TreeStats> {
        let traversal = BaseTraversal::new(&self.config);
        let mut ancestors = vec![traversal.enter_directory(root, &[])?];

        output
            .output_node(".", true, true, "", true)
            .map_err(TreeError::Write)?;

        let mut stats = TreeStats::default();
        self.walk_dir_streaming(&traversal, root, "", &mut ancestors, output, &mut stats)?;

        output.finish(stats).map_err(TreeError::Write)?;
        Ok(stats)
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        traversal: &BaseTraversal<'_>,
        path: &Path,
        prefix: &str,
        ancestors: &mut Vec<PathBuf>,
        output: &mut O,
        stats: &mut TreeStats,
    ) -> Result<()> {
        let entries = traversal.read_entries(path)?;
        debug!(path = %path.display(), entries = entries.len(), "listing directory");

        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;

            output
                .output_node(&entry.name, entry.is_dir, is_last, prefix, false)
                .map_err(TreeError::Write)?;

            if !entry.is_dir {
                stats.files += 1;
                continue;
            }
            stats.directories += 1;

            let real = match traversal.enter_directory(&entry.path, ancestors) {
                Ok(real) => real,
                Err(e) => {
                    if matches!(e, TreeError::CyclicStructure(_)) {
                        warn!(path = %entry.path.display(), "refusing to follow symlink cycle");
                    }
                    return Err(e);
                }
            };
            if entry.is_symlink {
                debug!(path = %entry.path.display(), target = %real.display(), "following symlink");
            }

            let new_prefix = traversal.calculate_child_prefix(prefix, is_last);
            ancestors.push(real);
            self.walk_dir_streaming(traversal, &entry.path, &new_prefix, ancestors, output, stats)?;
            ancestors.pop();
        }

        Ok(())
    }
}
