//! Per-directory traversal helpers used by the streaming walker.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::config::{SortOrder, WalkerConfig};

/// Pointer for every sibling except the last.
pub const BRANCH: &str = "├── ";
/// Pointer for the last sibling.
pub const TERMINAL: &str = "└── ";
/// Prefix segment below a branch edge.
pub const CONTINUATION: &str = "│   ";
/// Prefix segment below a terminal edge.
pub const BLANK: &str = "    ";

/// One immediate child of a directory, resolved at traversal time.
#[derive(Debug)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    /// Whether the walker should descend into this entry.
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Traversal rules shared by every directory the walker visits.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Check that `root` exists and is a directory we can list.
    pub fn validate_root(&self, root: &Path) -> Result<()> {
        let meta = fs::metadata(root).map_err(|e| TreeError::from_io(root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }
        // mode 000 still passes stat
        fs::read_dir(root).map_err(|e| TreeError::from_io(root, e))?;
        Ok(())
    }

    /// Read the immediate children of `path` in the configured order.
    pub fn read_entries(&self, path: &Path) -> Result<Vec<ChildEntry>> {
        let entries = fs::read_dir(path).map_err(|e| TreeError::from_io(path, e))?;

        let mut entries = entries
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| TreeError::from_io(path, e))?;

        if self.config.sort == SortOrder::Name {
            entries.sort_by_key(|a| a.file_name());
        }

        Ok(entries
            .into_iter()
            .map(|entry| {
                let entry_path = entry.path();
                let is_symlink = entry
                    .file_type()
                    .map(|t| t.is_symlink())
                    .unwrap_or(false);
                // is_dir() follows symlinks; broken links come back false
                let is_dir = entry_path.is_dir() && (self.config.follow_symlinks || !is_symlink);
                ChildEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path: entry_path,
                    is_dir,
                    is_symlink,
                }
            })
            .collect())
    }

    /// Calculate the prefix for child entries
    pub fn calculate_child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", current_prefix, BLANK)
        } else {
            format!("{}{}", current_prefix, CONTINUATION)
        }
    }

    /// Resolve the real path of a directory about to be entered and reject it
    /// when it is already one of its own ancestors.
    pub fn enter_directory(&self, path: &Path, ancestors: &[PathBuf]) -> Result<PathBuf> {
        let real = fs::canonicalize(path).map_err(|e| TreeError::from_io(path, e))?;
        if ancestors.contains(&real) {
            return Err(TreeError::CyclicStructure(path.to_path_buf()));
        }
        Ok(real)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_prefix_tokens_are_four_columns() {
        for token in [BRANCH, TERMINAL, CONTINUATION, BLANK] {
            assert_eq!(token.chars().count(), 4, "token {:?}", token);
        }
    }

    #[test]
    fn test_calculate_child_prefix() {
        let config = WalkerConfig::default();
        let traversal = BaseTraversal::new(&config);

        assert_eq!(traversal.calculate_child_prefix("", false), "│   ");
        assert_eq!(traversal.calculate_child_prefix("", true), "    ");
        assert_eq!(traversal.calculate_child_prefix("│   ", true), "│       ");
        assert_eq!(traversal.calculate_child_prefix("    ", false), "    │   ");
    }

    #[test]
    fn test_read_entries_classifies_failures() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let config = WalkerConfig::default();
        let traversal = BaseTraversal::new(&config);

        let err = traversal.read_entries(&file).unwrap_err();
        assert!(matches!(err, TreeError::NotADirectory(ref p) if p == &file));

        let gone = dir.path().join("gone");
        let err = traversal.read_entries(&gone).unwrap_err();
        assert!(matches!(err, TreeError::PathNotFound(ref p) if p == &gone));
    }
}
