//! The final, immutable result of one analysis run.
//!
//! `Analysis` is plain serializable data with no formatting or color codes;
//! presentation is entirely the caller's concern. Its maps are assembled in
//! report order (the run's sort policy, filenames sorted), so serializing it
//! yields deterministic output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::aggregate::{LineRecord, ParseErrorRecord, UsageAggregator};
use crate::core::sort::{sorted_counts, SortPolicy};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Every file the run scanned, in discovery order.
    pub filenames: Vec<String>,
    /// Number of distinct components seen.
    pub component_total: usize,
    /// Total component occurrences; always the sum of `component_usage`.
    pub component_usage_total: usize,
    pub component_usage: IndexMap<String, usize>,
    pub prop_usage: IndexMap<String, IndexMap<String, usize>>,
    pub line_usage: IndexMap<String, IndexMap<String, Vec<LineRecord>>>,
    /// Parse failures keyed by filename.
    pub errors: IndexMap<String, ParseErrorRecord>,
    /// Syntax extensions that would fix at least one failed file.
    pub suggested_syntax: Vec<String>,
    /// Wall-clock duration of the run, in seconds.
    pub elapsed_time: f64,
}

/// Drain the aggregator into an `Analysis`, applying the sort policy once.
pub(crate) fn assemble(
    aggregator: UsageAggregator,
    filenames: Vec<String>,
    policy: SortPolicy,
    elapsed_time: f64,
) -> Analysis {
    let component_entries = sorted_counts(&aggregator.component_usage, policy);
    let component_total = component_entries.len();
    let component_usage_total = component_entries.iter().map(|(_, count)| count).sum();
    let component_usage: IndexMap<String, usize> = component_entries.into_iter().collect();

    let mut prop_usage: IndexMap<String, IndexMap<String, usize>> = IndexMap::new();
    for name in component_usage.keys() {
        if let Some(props) = aggregator.prop_usage.get(name) {
            prop_usage.insert(
                name.clone(),
                sorted_counts(props, policy).into_iter().collect(),
            );
        }
    }

    // Line records came from matches, so their keys are a subset of the
    // prop-usage keys; reuse that ordering.
    let mut line_maps = aggregator.line_usage;
    let mut line_usage = IndexMap::new();
    for (name, props) in &prop_usage {
        if let Some(mut records) = line_maps.remove(name) {
            let mut ordered = IndexMap::new();
            for prop in props.keys() {
                if let Some(list) = records.remove(prop) {
                    ordered.insert(prop.clone(), list);
                }
            }
            line_usage.insert(name.clone(), ordered);
        }
    }

    let mut error_entries: Vec<(String, ParseErrorRecord)> =
        aggregator.errors.into_iter().collect();
    error_entries.sort_by(|a, b| a.0.cmp(&b.0));

    Analysis {
        filenames,
        component_total,
        component_usage_total,
        component_usage,
        prop_usage,
        line_usage,
        errors: error_entries.into_iter().collect(),
        suggested_syntax: aggregator.suggested_syntax,
        elapsed_time,
    }
}
