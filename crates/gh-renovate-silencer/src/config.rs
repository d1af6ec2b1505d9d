//! Run configuration
//!
//! Command line flags merged with an optional config file. The file only
//! contributes standing repository exclusions; everything else comes from
//! the invocation.

use serde::Deserialize;
use std::collections::HashSet;
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-renovate-silencer.toml";

/// Configuration for one silencing run, immutable once built
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub personal access token
    pub token: String,

    /// Repositories (full names) whose notifications are never touched
    pub exclude_repos: HashSet<String>,

    /// Report intended actions without performing them
    pub dry_run: bool,

    /// Per-item diagnostics enabled
    pub verbose: bool,
}

impl Config {
    /// Build a run config, merging CLI exclusions with file defaults
    pub fn new(
        token: String,
        cli_excludes: Vec<String>,
        file_excludes: Vec<String>,
        dry_run: bool,
        verbose: bool,
    ) -> Self {
        let exclude_repos = cli_excludes
            .into_iter()
            .chain(file_excludes)
            .collect::<HashSet<_>>();

        Self {
            token,
            exclude_repos,
            dry_run,
            verbose,
        }
    }
}

/// Standing settings loaded from .gh-renovate-silencer.toml
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Repositories excluded on every run
    #[serde(default)]
    pub exclude_repos: Vec<String>,
}

impl FileConfig {
    /// Load from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::debug!("Loaded config file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        Self::default()
    }
}

/// Load config file content from CWD first, then home directory
fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    if let Some(home_config) = get_home_config_path() {
        if let Ok(content) = std::fs::read_to_string(&home_config) {
            log::debug!("Loaded config from {}", home_config.display());
            return Some(content);
        }
    }

    None
}

fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
