//! Core analysis engine.
//!
//! Turns parsed syntax trees into usage facts, matches them against an
//! optional prop filter, and aggregates everything into one deterministic,
//! serializable [`Analysis`] value per run.

pub mod aggregate;
pub mod analysis;
pub mod excerpt;
pub mod extract;
pub mod facts;
pub mod file_scanner;
pub mod filter;
pub mod parsers;
pub mod session;
pub mod sort;

pub use aggregate::{LineRecord, ParseErrorRecord, UsageAggregator};
pub use analysis::Analysis;
pub use excerpt::ExcerptCache;
pub use facts::{ElementFact, PropFact, PropValue, SourceLocation, SPREAD_PROP};
pub use file_scanner::{scan_files, ScanOptions, ScanResult};
pub use filter::PropQuery;
pub use parsers::{parse_source, ParseFailure, ParsedSource, SyntaxExtension};
pub use session::{analyze, AnalysisSession, AnalyzeOptions, ReportKind};
pub use sort::SortPolicy;
