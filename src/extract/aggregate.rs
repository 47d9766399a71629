//! Partitioned name aggregation.
//!
//! The same object may be declared (or extended) in several models. Listing is
//! done per model, and a model that cannot be listed only loses its own
//! contribution.

use std::collections::BTreeSet;

use crate::catalog::Partition;
use crate::error::Result;

/// Outcome of aggregating names across partitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregate {
    /// Unique names, ascending
    pub names: Vec<String>,
    /// Partitions that listed at least one name
    pub succeeded: usize,
    /// Partitions that listed nothing
    pub empty: usize,
    /// Partitions whose listing failed
    pub failed: Vec<String>,
}

/// Deduplicated, sorted union of the names listed for each partition.
///
/// Partitions are visited in order. A listing failure is logged and the
/// partition is skipped; it is never retried and never returned to the caller.
pub fn collect_names<F>(partitions: &[Partition], mut list: F) -> Aggregate
where
    F: FnMut(&Partition) -> Result<Vec<String>>,
{
    let mut names = BTreeSet::new();
    let mut aggregate = Aggregate::default();

    for partition in partitions {
        match list(partition) {
            Ok(listed) if listed.is_empty() => {
                aggregate.empty += 1;
            }
            Ok(listed) => {
                log::debug!("  {}: {} objects", partition.name, listed.len());
                aggregate.succeeded += 1;
                names.extend(listed);
            }
            Err(e) => {
                log::warn!("  {}: listing failed: {e}", partition.name);
                aggregate.failed.push(partition.name.clone());
            }
        }
    }

    aggregate.names = names.into_iter().collect();
    log::info!(
        "Models: {} with objects, {} empty, {} errors; {} unique names",
        aggregate.succeeded,
        aggregate.empty,
        aggregate.failed.len(),
        aggregate.names.len()
    );
    aggregate
}

/// Names only; see [`collect_names`].
pub fn aggregate_names<F>(partitions: &[Partition], list: F) -> Vec<String>
where
    F: FnMut(&Partition) -> Result<Vec<String>>,
{
    collect_names(partitions, list).names
}
