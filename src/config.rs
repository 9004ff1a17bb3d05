use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::validate_patterns;
use crate::core::{SortPolicy, SyntaxExtension};

pub const CONFIG_FILE_NAME: &str = ".propscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns selecting source files to scan.
    #[serde(default = "default_files")]
    pub files: Vec<String>,
    /// Glob patterns to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Honor .gitignore files during discovery.
    #[serde(default = "default_gitignore")]
    pub gitignore: bool,
    /// Only count these components (dotted names); empty means all.
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub sort: SortPolicy,
    /// Syntax extensions enabled when parsing.
    #[serde(default)]
    pub syntax: Vec<SyntaxExtension>,
}

fn default_files() -> Vec<String> {
    vec!["**/*.{js,jsx,tsx}".to_string()]
}

fn default_gitignore() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: default_files(),
            ignores: Vec::new(),
            gitignore: default_gitignore(),
            components: Vec::new(),
            sort: SortPolicy::default(),
            syntax: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `files` or `ignores` is
    /// invalid, before anything is scanned.
    pub fn validate(&self) -> Result<()> {
        validate_patterns(&self.files, "files")?;
        validate_patterns(&self.ignores, "ignores")?;
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
