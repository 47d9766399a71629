//! # axdoc - Metadata Catalog Documentation
//!
//! axdoc walks a hierarchical metadata catalog (packages containing models,
//! models containing objects such as tables, enums, classes and forms) and
//! writes a single markdown document describing a chosen subset of object
//! categories.
//!
//! ## Quick Start
//!
//! ```no_run
//! use axdoc::catalog::{Category, FileSystemProvider};
//! use axdoc::config::ExtractOptions;
//! use axdoc::extract::Orchestrator;
//! use axdoc::report::OutputSink;
//! use std::path::Path;
//!
//! # fn example() -> axdoc::error::Result<()> {
//! let provider = FileSystemProvider::open("/packages")?;
//! let options = ExtractOptions::default();
//! let enabled = [Category::Enums, Category::Tables].into_iter().collect();
//!
//! let sink = OutputSink::create(Path::new("docs.md"))?;
//! let report = Orchestrator::new(&provider, provider.partitions(), &options)
//!     .run(&enabled, sink)?;
//! println!("{} objects documented", report.tally.total().documented);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`catalog`]: categories, partitions, records and the provider boundary
//! - [`extract`]: name aggregation, shape classification, category extractors
//!   and the orchestrator
//! - [`report`]: the append-only output document
//! - [`config`]: run configuration
//! - [`error`]: error types
//! - [`logging`]: logger setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod report;
