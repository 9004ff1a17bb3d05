//! Running aggregation of facts across a whole run.
//!
//! One [`UsageAggregator`] is owned by each analysis run. It is mutated only
//! during the sequential scan and drained once into the final
//! [`Analysis`](crate::core::analysis::Analysis) value.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::facts::{PropFact, SourceLocation};
use crate::core::parsers::ParseFailure;

/// One retained source line range for the lines report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    /// The matched attribute's exact source text.
    pub source: String,
    /// Line-numbered excerpt of the covered source range.
    pub excerpt: String,
    pub start: SourceLocation,
    pub end: SourceLocation,
    pub filename: String,
}

/// A recorded per-file parse failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorRecord {
    pub message: String,
    /// Byte offset of the failure within the file.
    pub position: usize,
    pub location: SourceLocation,
    /// Syntax extensions that would make the file parse.
    pub missing_syntax: Vec<String>,
}

/// Accumulates component counts, prop counts, line records and parse errors.
///
/// All operations are cheap map updates; none of them block or fail.
#[derive(Debug, Default)]
pub struct UsageAggregator {
    pub(crate) component_usage: HashMap<String, usize>,
    pub(crate) prop_usage: HashMap<String, HashMap<String, usize>>,
    pub(crate) line_usage: HashMap<String, HashMap<String, Vec<LineRecord>>>,
    pub(crate) errors: HashMap<String, ParseErrorRecord>,
    /// Insertion-ordered, deduplicated suggestions.
    pub(crate) suggested_syntax: Vec<String>,
    collect_lines: bool,
}

impl UsageAggregator {
    pub fn new(collect_lines: bool) -> Self {
        Self {
            collect_lines,
            ..Self::default()
        }
    }

    /// Count one component occurrence. The first occurrence initializes the
    /// per-component prop and line sub-maps so they exist even when no prop
    /// ever matches.
    pub fn record_component(&mut self, name: &str) {
        let count = self.component_usage.entry(name.to_string()).or_insert(0);
        if *count == 0 {
            self.prop_usage.entry(name.to_string()).or_default();
            if self.collect_lines {
                self.line_usage.entry(name.to_string()).or_default();
            }
        }
        *count += 1;
    }

    /// Count one matched prop fact and, when the lines report is active,
    /// append its line record in encounter order.
    pub fn record_match(&mut self, fact: &PropFact, filename: &str, excerpt: String) {
        *self
            .prop_usage
            .entry(fact.component.clone())
            .or_default()
            .entry(fact.prop.clone())
            .or_insert(0) += 1;

        if self.collect_lines {
            self.line_usage
                .entry(fact.component.clone())
                .or_default()
                .entry(fact.prop.clone())
                .or_default()
                .push(LineRecord {
                    source: fact.source.clone(),
                    excerpt,
                    start: fact.start,
                    end: fact.end,
                    filename: filename.to_string(),
                });
        }
    }

    /// Record a per-file parse failure. Re-recording a filename replaces the
    /// previous record; missing-syntax suggestions merge into the
    /// deduplicated suggestion list.
    pub fn record_parse_error(&mut self, filename: &str, failure: ParseFailure) {
        for name in &failure.missing_syntax {
            if !self.suggested_syntax.contains(name) {
                self.suggested_syntax.push(name.clone());
            }
        }
        self.errors.insert(
            filename.to_string(),
            ParseErrorRecord {
                message: failure.message,
                position: failure.position,
                location: failure.location,
                missing_syntax: failure.missing_syntax,
            },
        );
    }
}
