//! Aggregation-and-extraction pipeline.
//!
//! ```text
//! Orchestrator
//!   └─> per enabled category: extractor
//!         ├─> aggregate names across models   (aggregate)
//!         ├─> read each object                (MetadataProvider)
//!         ├─> pull fields, classify shapes    (catalog::record, classify)
//!         └─> append one block per object     (report::OutputSink)
//! ```
//!
//! A fault while listing a model or reading an object is logged and counted,
//! never propagated: the pipeline cannot be aborted by one bad record. Only a
//! failure to write the output document ends a run early.

pub mod aggregate;
pub mod classes;
pub mod classify;
pub mod edts;
pub mod enums;
pub mod maps;
pub mod menu_items;
pub mod named;
pub mod orchestrator;
pub mod queries;
pub mod services;
pub mod session;
pub mod tables;
pub mod tally;
pub mod views;

pub use aggregate::{Aggregate, aggregate_names, collect_names};
pub use classify::{ShapeKind, classify, classify_shape};
pub use orchestrator::{Orchestrator, RunReport};
pub use session::Session;
pub use tally::{Count, Tally};
