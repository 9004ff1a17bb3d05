//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Analyze JSX component and prop usage
//! - `init`: Write a default .propscanrc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::{ReportKind, SortPolicy, SyntaxExtension};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Only count these components (dotted names; default: all)
    #[arg(long, num_args = 1..)]
    pub components: Vec<String>,

    /// Prop filter: `key`, `key=value`, `key!=value`, or `!key`
    #[arg(long)]
    pub prop: Option<String>,

    /// Reports to compute (default: usage props)
    #[arg(long, value_enum, num_args = 1..)]
    pub report: Vec<ReportKind>,

    /// Sort order for report entries (overrides config file)
    #[arg(long, value_enum)]
    pub sort: Option<SortPolicy>,

    /// Syntax extensions to enable when parsing
    #[arg(long, value_enum, num_args = 1..)]
    pub syntax: Vec<SyntaxExtension>,

    /// Glob patterns selecting source files (overrides config file)
    #[arg(long, num_args = 1..)]
    pub files: Vec<String>,

    /// Glob patterns to skip (appended to config file ignores)
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Do not honor .gitignore files during discovery
    #[arg(long)]
    pub no_gitignore: bool,

    /// Print the analysis as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Directory to scan (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze JSX component and prop usage
    Scan(ScanCommand),
    /// Initialize a new .propscanrc.json configuration file
    Init,
}
