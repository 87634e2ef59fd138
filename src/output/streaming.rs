//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes tree lines
//! straight to a writer as `StreamingWalker` produces them.

use std::io::{self, Write};

use crate::tree::{BRANCH, StreamingOutput, TERMINAL, TreeStats};

use super::config::OutputConfig;

/// Streaming output formatter - writes one line per entry to `W`.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter<W: Write> {
    config: OutputConfig,
    out: W,
}

impl<W: Write> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StreamingOutput for StreamingFormatter<W> {
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        if is_root {
            return writeln!(self.out, "{}", name);
        }

        let connector = if is_last { TERMINAL } else { BRANCH };
        let marker = if is_dir && self.config.mark_dirs { "/" } else { "" };
        writeln!(self.out, "{}{}{}{}", prefix, connector, name, marker)
    }

    fn finish(&mut self, _stats: TreeStats) -> io::Result<()> {
        self.out.flush()
    }
}
