//! Source file discovery.
//!
//! Walks the source root honoring `.gitignore` (unless disabled), keeps
//! files matching the include patterns, drops files matching the ignore
//! patterns, and returns paths in sorted order so runs are deterministic.

use std::path::PathBuf;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// Discovery configuration.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub source_root: PathBuf,
    /// Include patterns, e.g. `**/*.{js,jsx,tsx}`.
    pub files: Vec<String>,
    /// Ignore patterns applied after the includes.
    pub ignore: Vec<String>,
    /// Honor `.gitignore` files during the walk.
    pub gitignore: bool,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matching file paths in sorted order.
    pub files: Vec<String>,
    /// Paths skipped due to access errors.
    pub skipped_count: usize,
}

pub fn scan_files(options: &ScanOptions) -> Result<ScanResult> {
    let includes = build_globset(&options.files, "files")?;
    let ignores = build_globset(&options.ignore, "ignore")?;

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkBuilder::new(&options.source_root)
        .git_ignore(options.gitignore)
        .git_global(options.gitignore)
        .git_exclude(options.gitignore)
        .parents(options.gitignore)
        .require_git(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => {
                skipped_count += 1;
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        // Patterns are matched relative to the source root.
        let relative = entry
            .path()
            .strip_prefix(&options.source_root)
            .unwrap_or_else(|_| entry.path());
        if includes.is_match(relative) && !ignores.is_match(relative) {
            files.push(entry.path().to_string_lossy().to_string());
        }
    }

    files.sort();
    Ok(ScanResult {
        files,
        skipped_count,
    })
}

fn build_globset(patterns: &[String], what: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", what, pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to build glob set")
}

/// Validate patterns without walking anything; used by config loading.
pub fn validate_patterns(patterns: &[String], what: &str) -> Result<()> {
    build_globset(patterns, what).map(|_| ())
}
