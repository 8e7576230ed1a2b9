//! Configuration file support for chipsel.
//!
//! Configuration is loaded from `~/.config/chipsel/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/chipsel/config.toml
//! candidates = "~/people.json"
//! backspace = "two_step"   # or "immediate"
//! title = "Pick Users"
//! placeholder = "Add new user"
//! max_visible_rows = 6
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chip::BackspaceMode;
use crate::error::{ChipError, Result};

const DEFAULT_TITLE: &str = "Pick Users";
const DEFAULT_PLACEHOLDER: &str = "Add new user";
const DEFAULT_MAX_VISIBLE_ROWS: usize = 6;

const CANDIDATES_ENV: &str = "CHIPSEL_CANDIDATES";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the candidate list
    pub candidates: Option<PathBuf>,

    /// How backspace removes chips at an empty query
    pub backspace: BackspaceMode,

    /// Heading shown above the input
    pub title: Option<String>,

    /// Placeholder shown while nothing is selected
    pub placeholder: Option<String>,

    /// Dropdown height in rows
    pub max_visible_rows: Option<usize>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ChipError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chipsel")
            .join("config.toml")
    }

    /// Merge with CLI and environment overrides.
    ///
    /// CLI arguments take precedence over `CHIPSEL_CANDIDATES`, which takes
    /// precedence over config file values.
    pub fn with_overrides(
        mut self,
        candidates: Option<PathBuf>,
        env_candidates: Option<PathBuf>,
        backspace: Option<BackspaceMode>,
    ) -> Self {
        let candidates = candidates.or(env_candidates);
        if candidates.is_some() {
            self.candidates = candidates;
        }
        if let Some(mode) = backspace {
            self.backspace = mode;
        }
        self
    }

    /// Read `CHIPSEL_CANDIDATES` from the environment.
    pub fn env_candidates() -> Option<PathBuf> {
        std::env::var_os(CANDIDATES_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Get the candidate file with `~` expanded.
    pub fn candidates_path(&self) -> Option<PathBuf> {
        self.candidates.as_deref().map(expand_home)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    pub fn max_visible_rows(&self) -> usize {
        self.max_visible_rows
            .filter(|&rows| rows > 0)
            .unwrap_or(DEFAULT_MAX_VISIBLE_ROWS)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
