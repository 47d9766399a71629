//! Shared per-category protocol.
//!
//! Every category extractor goes through a [`Session`]: aggregate names, write a
//! header, read and document each object, write a terminator. Object-level
//! faults are counted and logged here; only output failures escape.

use std::io::Write;

use super::aggregate::aggregate_names;
use super::tally::Tally;
use crate::catalog::{MetadataProvider, ObjectKind, Partition, Record, RecordExt as _};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::OutputSink;
use crate::report::markdown::SECTION_TERMINATOR;

/// Everything an extractor needs for one run.
pub struct Session<'a, P: ?Sized, W: Write> {
    provider: &'a P,
    partitions: &'a [Partition],
    options: &'a ExtractOptions,
    sink: &'a mut OutputSink<W>,
    tally: &'a mut Tally,
}

impl<'a, P, W> Session<'a, P, W>
where
    P: MetadataProvider + ?Sized,
    W: Write,
{
    pub fn new(
        provider: &'a P,
        partitions: &'a [Partition],
        options: &'a ExtractOptions,
        sink: &'a mut OutputSink<W>,
        tally: &'a mut Tally,
    ) -> Self {
        Self {
            provider,
            partitions,
            options,
            sink,
            tally,
        }
    }

    pub fn options(&self) -> &'a ExtractOptions {
        self.options
    }

    pub fn tally_mut(&mut self) -> &mut Tally {
        self.tally
    }

    /// Sorted unique names of `kind` across all partitions.
    pub fn aggregate(&self, kind: ObjectKind) -> Vec<String> {
        log::info!("Listing {} across {} models", kind.label(), self.partitions.len());
        aggregate_names(self.partitions, |partition| {
            self.provider.list_identifiers(kind, partition)
        })
    }

    /// Read one object. Faults, absent objects and non-object records are
    /// logged and come back as `None`.
    pub fn read(&self, kind: ObjectKind, name: &str) -> Option<Record> {
        match self.provider.read_object(kind, name) {
            Ok(Some(record)) if record.is_object() => Some(record),
            Ok(Some(_)) => {
                log::warn!("{kind} {name}: record is not an object, skipped");
                None
            }
            Ok(None) => {
                log::warn!("{kind} {name}: not found, skipped");
                None
            }
            Err(e) => {
                log::warn!("{kind} {name}: {e}");
                None
            }
        }
    }

    /// Append a block without flushing.
    ///
    /// # Errors
    ///
    /// Fails when the output document cannot be written.
    pub fn write(&mut self, block: &str) -> Result<()> {
        self.sink.write_block(block)
    }

    /// Append a block and flush it through.
    ///
    /// # Errors
    ///
    /// Fails when the block cannot be written or flushed.
    pub fn write_flushed(&mut self, block: &str) -> Result<()> {
        self.sink.write_block(block)?;
        self.sink.flush()
    }

    /// Close a section with the fixed terminator.
    ///
    /// # Errors
    ///
    /// Fails when the terminator cannot be written.
    pub fn end_section(&mut self) -> Result<()> {
        self.write_flushed(SECTION_TERMINATOR)
    }

    /// Document every object of `kind` using the shared protocol.
    ///
    /// `header` receives the number of names found. `extract` turns a record
    /// into a document value, `render` turns that value into one block.
    ///
    /// # Errors
    ///
    /// Only output failures are returned. Read faults are logged and counted
    /// as skipped.
    pub fn document_kind<D>(
        &mut self,
        kind: ObjectKind,
        header: impl FnOnce(usize) -> String,
        extract: impl Fn(&Record, &ExtractOptions) -> D,
        render: impl Fn(&str, &D) -> String,
    ) -> Result<()> {
        let names = self.aggregate(kind);
        self.document_names(kind, &names, header, extract, render)
    }

    /// Same as [`Session::document_kind`] over an explicit name list.
    ///
    /// # Errors
    ///
    /// Fails when the output document cannot be written.
    pub fn document_names<D>(
        &mut self,
        kind: ObjectKind,
        names: &[String],
        header: impl FnOnce(usize) -> String,
        extract: impl Fn(&Record, &ExtractOptions) -> D,
        render: impl Fn(&str, &D) -> String,
    ) -> Result<()> {
        let label = kind.label();
        self.tally.touch(label);
        self.write_flushed(&header(names.len()))?;

        for name in names {
            let Some(record) = self.read(kind, name) else {
                self.tally.record_failure(label);
                continue;
            };
            let doc = extract(&record, self.options);
            self.write_flushed(&render(name, &doc))?;
            self.tally.record_success(label);
        }

        self.end_section()?;
        let count = self.tally.get(label);
        log::info!(
            "{label}: {} documented, {} skipped",
            count.documented,
            count.skipped
        );
        Ok(())
    }
}

/// Extract every item of a nested collection, skipping items that are not
/// objects or that `extract` rejects.
pub fn collect_items<'r, T>(
    record: &'r Record,
    attribute: &str,
    mut extract: impl FnMut(&'r Record) -> Option<T>,
) -> Vec<T> {
    record
        .children(attribute)
        .into_iter()
        .filter_map(|item| {
            let extracted = if item.is_object() { extract(item) } else { None };
            if extracted.is_none() {
                log::debug!("Skipping malformed {attribute} entry: {item}");
            }
            extracted
        })
        .collect()
}

/// Member field names of an index or field group.
pub fn member_fields(record: &Record) -> Vec<String> {
    collect_items(record, "Fields", |field| {
        field.opt_text("DataField").or_else(|| field.opt_text("Name"))
    })
}
