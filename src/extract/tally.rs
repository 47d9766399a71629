//! Per-category success and failure counters.

use std::collections::BTreeMap;

/// Counters for one tally entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count {
    /// Objects written to the document
    pub documented: usize,
    /// Objects skipped because they could not be read
    pub skipped: usize,
}

/// Accumulated counts keyed by category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<String, Count>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `label` appears in the summary even if nothing is counted.
    pub fn touch(&mut self, label: &str) {
        self.entry(label);
    }

    pub fn record_success(&mut self, label: &str) {
        self.entry(label).documented += 1;
    }

    pub fn record_failure(&mut self, label: &str) {
        self.entry(label).skipped += 1;
    }

    /// Add `n` documented objects at once.
    pub fn add_documented(&mut self, label: &str, n: usize) {
        self.entry(label).documented += n;
    }

    pub fn get(&self, label: &str) -> Count {
        self.counts.get(label).copied().unwrap_or_default()
    }

    /// Entries by documented count, descending; ties ordered by label.
    pub fn sorted(&self) -> Vec<(&str, Count)> {
        let mut rows: Vec<_> = self
            .counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| b.1.documented.cmp(&a.1.documented).then(a.0.cmp(b.0)));
        rows
    }

    /// Sum over every entry.
    pub fn total(&self) -> Count {
        self.counts.values().fold(Count::default(), |acc, c| Count {
            documented: acc.documented + c.documented,
            skipped: acc.skipped + c.skipped,
        })
    }

    fn entry(&mut self, label: &str) -> &mut Count {
        self.counts.entry(label.to_owned()).or_default()
    }
}
