//! Configuration types for tree walkers

/// Order in which a directory's children are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort by raw file name, giving reproducible output across platforms.
    #[default]
    Name,
    /// Keep whatever order the operating system's directory listing yields.
    Filesystem,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub sort: SortOrder,
    /// Descend into symlinks that point at directories.
    /// When false they are listed as leaves.
    pub follow_symlinks: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::Name,
            follow_symlinks: true,
        }
    }
}
