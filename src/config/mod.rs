pub mod init;
mod schema;

pub use schema::{Config, HistoryConfig, DEFAULT_MIN_PLAYERS};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/squad-split/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("squad-split"))
}

/// Get the default config file path (~/.config/squad-split/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/squad-split/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `squad-split init` to create one",
            config_path.display()
        );
    }

    parse_config_file(&config_path)
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}

/// Validate a loaded config.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, p) in config.roster.iter().enumerate() {
        if !seen.insert(p.id) {
            errors.push(format!("roster[{}].id: duplicate id {}", i, p.id));
        }
        if !p.skill.is_finite() {
            errors.push(format!("roster[{}].skill: must be a finite number", i));
        }
    }

    if matches!(config.min_players, Some(n) if n < 2) {
        errors.push("min_players: must be at least 2".to_string());
    }

    if let Some(history) = &config.history {
        if history.max_entries == Some(0) {
            errors.push("history.max_entries: must be at least 1".to_string());
        }
    }

    if let Some(scoring) = &config.scoring {
        if let Err(scoring_errors) = validate_scoring(scoring) {
            errors.extend(scoring_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
