//! Append-only output document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, ResultExt as _};

/// Ordered, append-only sequence of text blocks.
///
/// Blocks are buffered until [`OutputSink::flush`]; extractors flush after
/// every documented object so an interrupted run loses at most one record.
pub struct OutputSink<W: Write> {
    writer: BufWriter<W>,
}

impl OutputSink<File> {
    /// Create (or truncate) the document at `path`, creating parent folders.
    ///
    /// # Errors
    ///
    /// Fails when a parent folder or the file itself cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> OutputSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Append one block verbatim.
    ///
    /// # Errors
    ///
    /// Fails when the buffered writer cannot accept the block.
    pub fn write_block(&mut self, block: &str) -> Result<()> {
        self.writer
            .write_all(block.as_bytes())
            .context("Failed to write to output document")
    }

    /// Push buffered blocks through to the underlying writer.
    ///
    /// # Errors
    ///
    /// Fails when the underlying writer rejects the data.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .context("Failed to flush output document")
    }

    /// Flush and hand back the underlying writer. Nothing can be appended after.
    ///
    /// # Errors
    ///
    /// Fails when the final flush fails.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Failed to close output document")
    }
}
