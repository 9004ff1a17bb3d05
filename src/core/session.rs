//! One analysis run: validate, scan files sequentially, assemble.
//!
//! Files are processed strictly one at a time; parsing and traversal of one
//! file complete before the next begins. The only suspension point is the
//! caller-supplied per-file hook, which runs between files. A started run
//! processes all discovered files to completion.

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;

use crate::core::aggregate::UsageAggregator;
use crate::core::analysis::{assemble, Analysis};
use crate::core::excerpt::ExcerptCache;
use crate::core::extract::extract_facts;
use crate::core::facts::{ElementFact, PropFact, SourceLocation};
use crate::core::filter::PropQuery;
use crate::core::parsers::{parse_source, ParseFailure, SyntaxExtension};
use crate::core::sort::SortPolicy;

/// Report facets to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Total component usage counts.
    Usage,
    /// Per-component prop usage counts.
    Props,
    /// Source lines where the filtered prop appears. Requires a prop filter.
    Lines,
}

/// Configuration consumed by one run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Only count these components; empty means all.
    pub components: Vec<String>,
    /// Optional prop filter string (`id`, `kind=primary`, `kind!=primary`,
    /// `!disabled`).
    pub prop: Option<String>,
    pub report: Vec<ReportKind>,
    pub sort: SortPolicy,
    pub syntax: Vec<SyntaxExtension>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            components: Vec::new(),
            prop: None,
            report: vec![ReportKind::Usage, ReportKind::Props],
            sort: SortPolicy::Usage,
            syntax: Vec::new(),
        }
    }
}

/// Read and scan each file in order, then assemble the analysis.
///
/// The hook runs before each file is read. Files that cannot be read or
/// parsed are recorded as errors and the run continues.
pub fn analyze<F>(options: &AnalyzeOptions, filenames: &[String], mut on_file: F) -> Result<Analysis>
where
    F: FnMut(&str),
{
    let mut session = AnalysisSession::new(options)?;
    for filename in filenames {
        on_file(filename);
        match fs::read_to_string(filename) {
            Ok(code) => session.scan_source(filename, &code),
            Err(err) => session.record_parse_error(
                filename,
                ParseFailure {
                    message: format!("Failed to read file: {err}"),
                    position: 0,
                    location: SourceLocation::new(1, 0),
                    missing_syntax: Vec::new(),
                },
            ),
        }
    }
    Ok(session.finish(filenames.to_vec()))
}

/// The per-run engine owning all mutable state.
pub struct AnalysisSession {
    only_components: Vec<String>,
    query: Option<PropQuery>,
    sort: SortPolicy,
    syntax: Vec<SyntaxExtension>,
    collect_lines: bool,
    aggregator: UsageAggregator,
    excerpts: ExcerptCache,
    started: Instant,
}

impl AnalysisSession {
    /// Validate the configuration before any file is scanned.
    pub fn new(options: &AnalyzeOptions) -> Result<Self> {
        if options.report.contains(&ReportKind::Lines) && options.prop.is_none() {
            bail!("the lines report requires a prop filter (--prop)");
        }
        let collect_lines = options.report.contains(&ReportKind::Lines);
        Ok(Self {
            only_components: options.components.clone(),
            query: options.prop.as_deref().map(PropQuery::parse),
            sort: options.sort,
            syntax: options.syntax.clone(),
            collect_lines,
            aggregator: UsageAggregator::new(collect_lines),
            excerpts: ExcerptCache::new(),
            started: Instant::now(),
        })
    }

    /// Parse one file and aggregate its facts, or record its parse failure.
    pub fn scan_source(&mut self, filename: &str, code: &str) {
        match parse_source(code, filename, &self.syntax) {
            Err(failure) => self.aggregator.record_parse_error(filename, failure),
            Ok(parsed) => {
                let elements = extract_facts(&parsed, code, &self.only_components);
                let query = self.query.clone();
                for element in elements {
                    self.aggregator.record_component(&element.name);
                    self.route_props(query.as_ref(), &element, filename, code);
                }
            }
        }
    }

    pub fn record_parse_error(&mut self, filename: &str, failure: ParseFailure) {
        self.aggregator.record_parse_error(filename, failure);
    }

    /// Produce the final analysis. Consumes the session: a run yields
    /// exactly one `Analysis`.
    pub fn finish(self, filenames: Vec<String>) -> Analysis {
        let elapsed = if env::var_os("PROPSCAN_DISABLE_TIMING").is_some() {
            0.0
        } else {
            self.started.elapsed().as_secs_f64()
        };
        assemble(self.aggregator, filenames, self.sort, elapsed)
    }

    fn route_props(
        &mut self,
        query: Option<&PropQuery>,
        element: &ElementFact,
        filename: &str,
        code: &str,
    ) {
        match query {
            // `!key` is an element-level condition: when it holds, one
            // synthetic fact covering the element stands in for a match.
            Some(PropQuery::Absent { key }) => {
                if element.lacks_prop(key) {
                    let fact = element.absent_fact(key);
                    self.record(&fact, filename, code);
                }
            }
            Some(query) => {
                for fact in &element.props {
                    if query.matches(fact) {
                        self.record(fact, filename, code);
                    }
                }
            }
            None => {
                for fact in &element.props {
                    self.record(fact, filename, code);
                }
            }
        }
    }

    fn record(&mut self, fact: &PropFact, filename: &str, code: &str) {
        let excerpt = if self.collect_lines {
            self.excerpts
                .render(code, fact.start.line, fact.end.line)
        } else {
            String::new()
        };
        self.aggregator.record_match(fact, filename, excerpt);
    }
}
