//! Extraction orchestrator: runs the enabled extractors in document order.

use chrono::{DateTime, Utc};
use std::io::Write;

use super::session::Session;
use super::tally::Tally;
use super::{classes, edts, enums, maps, menu_items, named, queries, services, tables, views};
use crate::catalog::{Category, CategorySet, MetadataProvider, Partition};
use crate::config::ExtractOptions;
use crate::error::Result;
use crate::report::OutputSink;
use crate::report::markdown::{CATEGORY_SEPARATOR, run_header};

/// One extractor invocation. Security and composite steps each cover several
/// categories and gate them individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Enums,
    Edts,
    Tables,
    Views,
    DataEntities,
    Classes,
    Forms,
    MenuItems,
    Queries,
    Services,
    Maps,
    Security,
    Composites,
}

const PLAN: [Step; 13] = [
    Step::Enums,
    Step::Edts,
    Step::Tables,
    Step::Views,
    Step::DataEntities,
    Step::Classes,
    Step::Forms,
    Step::MenuItems,
    Step::Queries,
    Step::Services,
    Step::Maps,
    Step::Security,
    Step::Composites,
];

impl Step {
    fn categories(self) -> &'static [Category] {
        match self {
            Self::Enums => &[Category::Enums],
            Self::Edts => &[Category::Edts],
            Self::Tables => &[Category::Tables],
            Self::Views => &[Category::Views],
            Self::DataEntities => &[Category::DataEntities],
            Self::Classes => &[Category::Classes],
            Self::Forms => &[Category::Forms],
            Self::MenuItems => &[Category::MenuItems],
            Self::Queries => &[Category::Queries],
            Self::Services => &[Category::Services],
            Self::Maps => &[Category::Maps],
            Self::Security => &named::SECURITY,
            Self::Composites => &named::COMPOSITES,
        }
    }

    fn is_enabled(self, enabled: &CategorySet) -> bool {
        self.categories().iter().any(|c| enabled.contains(c))
    }

    fn run<P, W>(self, session: &mut Session<'_, P, W>, enabled: &CategorySet) -> Result<()>
    where
        P: MetadataProvider + ?Sized,
        W: Write,
    {
        match self {
            Self::Enums => enums::document(session),
            Self::Edts => edts::document(session),
            Self::Tables => tables::document(session),
            Self::Views => views::document_views(session),
            Self::DataEntities => views::document_data_entities(session),
            Self::Classes => classes::document(session),
            Self::Forms => named::document_forms(session),
            Self::MenuItems => menu_items::document(session),
            Self::Queries => queries::document(session),
            Self::Services => services::document(session),
            Self::Maps => maps::document(session),
            Self::Security => named::document_gated(session, &named::SECURITY, enabled),
            Self::Composites => named::document_gated(session, &named::COMPOSITES, enabled),
        }
    }
}

/// Result of a finished run.
#[derive(Debug)]
pub struct RunReport<W> {
    /// Per-category counts
    pub tally: Tally,
    /// The closed output writer
    pub writer: W,
    /// Categories that were documented, in document order
    pub categories: Vec<Category>,
    /// Timestamp written in the run header
    pub generated: DateTime<Utc>,
}

/// Drives one documentation run over a fixed set of partitions.
pub struct Orchestrator<'a, P: ?Sized> {
    provider: &'a P,
    partitions: &'a [Partition],
    options: &'a ExtractOptions,
}

impl<'a, P> Orchestrator<'a, P>
where
    P: MetadataProvider + ?Sized,
{
    pub fn new(provider: &'a P, partitions: &'a [Partition], options: &'a ExtractOptions) -> Self {
        Self {
            provider,
            partitions,
            options,
        }
    }

    /// Run every enabled extractor, stamping the header with the current time.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::run_at`].
    pub fn run<W: Write>(
        &self,
        enabled: &CategorySet,
        sink: OutputSink<W>,
    ) -> Result<RunReport<W>> {
        self.run_at(enabled, sink, Utc::now())
    }

    /// Run every enabled extractor with a fixed header timestamp.
    ///
    /// The document is flushed after every record, so everything written
    /// before a failure is on disk.
    ///
    /// # Errors
    ///
    /// Only output failures abort the run and are returned.
    pub fn run_at<W: Write>(
        &self,
        enabled: &CategorySet,
        mut sink: OutputSink<W>,
        generated: DateTime<Utc>,
    ) -> Result<RunReport<W>> {
        let mut tally = Tally::new();

        sink.write_block(&run_header(generated, self.partitions.len()))?;
        sink.flush()?;

        let mut session = Session::new(
            self.provider,
            self.partitions,
            self.options,
            &mut sink,
            &mut tally,
        );

        for step in PLAN.into_iter().filter(|s| s.is_enabled(enabled)) {
            log::info!("Extracting {step:?}");
            step.run(&mut session, enabled)?;
            session.write_flushed(CATEGORY_SEPARATOR)?;
        }

        let categories = enabled.iter().copied().collect();
        let writer = sink.finish()?;

        let total = tally.total();
        log::info!(
            "Run finished: {} objects documented, {} skipped",
            total.documented,
            total.skipped
        );
        for (label, count) in tally.sorted() {
            log::debug!("  {label}: {} ({} skipped)", count.documented, count.skipped);
        }

        Ok(RunReport {
            tally,
            writer,
            categories,
            generated,
        })
    }
}
