//! Output document: the append-only sink and markdown formatting helpers.

pub mod markdown;
pub mod sink;

pub use sink::OutputSink;
