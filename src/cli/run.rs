use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Result;

use super::args::{Arguments, Command, ScanCommand};
use super::{report, ExitStatus};
use crate::config::{default_config_json, load_config, CONFIG_FILE_NAME};
use crate::core::{analyze, scan_files, AnalyzeOptions, ReportKind, ScanOptions};

/// Dispatch to the appropriate command handler based on parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitCode> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn scan(cmd: ScanCommand) -> Result<ExitCode> {
    let source_root = cmd.source_root.clone().unwrap_or_else(|| PathBuf::from("."));
    let loaded = load_config(&source_root)?;

    if cmd.verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let config = loaded.config;

    // CLI arguments override config file values, which override defaults.
    let files = if cmd.files.is_empty() {
        config.files
    } else {
        cmd.files.clone()
    };
    let mut ignore = config.ignores;
    ignore.extend(cmd.ignore.iter().cloned());
    let gitignore = if cmd.no_gitignore {
        false
    } else {
        config.gitignore
    };

    let options = AnalyzeOptions {
        components: if cmd.components.is_empty() {
            config.components
        } else {
            cmd.components.clone()
        },
        prop: cmd.prop.clone(),
        report: if cmd.report.is_empty() {
            vec![ReportKind::Usage, ReportKind::Props]
        } else {
            cmd.report.clone()
        },
        sort: cmd.sort.unwrap_or(config.sort),
        syntax: if cmd.syntax.is_empty() {
            config.syntax
        } else {
            cmd.syntax.clone()
        },
    };

    let scanned = scan_files(&ScanOptions {
        source_root,
        files,
        ignore,
        gitignore,
    })?;

    if scanned.skipped_count > 0 {
        eprintln!(
            "Warning: {} path(s) skipped due to access errors",
            scanned.skipped_count
        );
    }

    let analysis = analyze(&options, &scanned.files, |filename| {
        if cmd.verbose {
            eprintln!("Scanning {}", filename);
        }
    })?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        report::print(&analysis, &options.report);
    }

    Ok(ExitStatus::Success.into())
}

fn init() -> Result<ExitCode> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitStatus::Success.into())
}
