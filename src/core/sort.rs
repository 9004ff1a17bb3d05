//! Sort policies for report entries.
//!
//! Sorting is a pure function of the snapshot handed to it: the same
//! aggregated data can be rendered under either policy without
//! re-aggregating.

use std::cmp::Ordering;
use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Total order applied to (key, count) report entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Count descending; ties broken by key descending. The descending
    /// tie-break matches long-standing output and keeps it stable.
    #[default]
    Usage,
    /// Key ascending; ties broken by count descending.
    Alphabetical,
}

impl SortPolicy {
    pub fn compare(&self, a: (&str, usize), b: (&str, usize)) -> Ordering {
        match self {
            SortPolicy::Usage => b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0)),
            SortPolicy::Alphabetical => a.0.cmp(b.0).then_with(|| b.1.cmp(&a.1)),
        }
    }
}

/// Snapshot-sort a count map into an ordered entry list.
pub fn sorted_counts(counts: &HashMap<String, usize>, policy: SortPolicy) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> =
        counts.iter().map(|(key, count)| (key.clone(), *count)).collect();
    entries.sort_by(|a, b| policy.compare((&a.0, a.1), (&b.0, b.1)));
    entries
}
