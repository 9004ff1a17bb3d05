//! Propscan - JSX component and prop usage analyzer
//!
//! Propscan is a CLI tool and library for analyzing how JSX-style markup
//! components are used across a codebase. It counts component occurrences,
//! tallies prop usage per component, and can show the exact source lines
//! where a given prop appears.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (extraction, matching, aggregation)

pub mod cli;
pub mod config;
pub mod core;
