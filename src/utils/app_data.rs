use crate::highlight::DEFAULT_HIGHLIGHT_CLASS;
use crate::query::scorer::ScoringWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "leadscan";
const CONFIG_FILE: &str = "config.json";

/// Search tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this pass the input through unfiltered.
    /// Highlight terms shorter than this are not wrapped.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Maximum edit distance for a token to count as a typo of a term
    #[serde(default = "default_fuzzy_max_distance")]
    pub fuzzy_max_distance: usize,

    /// Tokens whose length differs from the term by more than this are never
    /// edit-distance checked
    #[serde(default = "default_fuzzy_length_tolerance")]
    pub fuzzy_length_tolerance: usize,

    /// Per-signal score weights
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Cap on rendered results (CLI only; the library always returns every match)
    #[serde(default)]
    pub result_limit: Option<usize>,
}

fn default_min_query_length() -> usize {
    2
}

fn default_fuzzy_max_distance() -> usize {
    2
}

fn default_fuzzy_length_tolerance() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
            fuzzy_max_distance: default_fuzzy_max_distance(),
            fuzzy_length_tolerance: default_fuzzy_length_tolerance(),
            weights: ScoringWeights::default(),
            result_limit: None,
        }
    }
}

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,

    /// Number of past queries kept, most recent first
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Maximum autocomplete suggestions returned
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// CSS class on the `<mark>` wrapper emitted by the highlighter
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,
}

fn default_history_size() -> usize {
    10
}

fn default_max_suggestions() -> usize {
    8
}

fn default_highlight_class() -> String {
    DEFAULT_HIGHLIGHT_CLASS.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            history_size: default_history_size(),
            max_suggestions: default_max_suggestions(),
            highlight_class: default_highlight_class(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path, or return default if the file does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the given path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file {}", config_path.display()))?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
