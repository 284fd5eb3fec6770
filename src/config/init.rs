use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::schema::{Config, HistoryConfig};
use crate::roster::Participant;

const HEADER: &str = "\
# squad-split configuration
#
# roster: everyone who might play. Only `id` and `skill` are used for balancing.
# min_players: fewest selected players `split` accepts.
# scoring: optional overrides of the fairness weights.
# history: how many past matchups to keep, and how many to avoid repeating.
";

/// Sixteen-player starter roster
pub fn starter_config() -> Config {
    let roster = vec![
        Participant::named(1, "Cesc", 95.0, "Mid"),
        Participant::named(2, "Ben", 85.0, "Mid"),
        Participant::named(3, "Soufiane", 85.0, "Fwd"),
        Participant::named(4, "Burhan", 85.0, "Fwd"),
        Participant::named(5, "Bryan", 85.0, "Mid"),
        Participant::named(6, "Carl", 60.0, "Def"),
        Participant::named(7, "Hongfei", 40.0, "Def"),
        Participant::named(8, "Chloe", 85.0, "Mid"),
        Participant::named(9, "Patrick", 40.0, "Def"),
        Participant::named(10, "Keivon", 40.0, "Def"),
        Participant::named(11, "Gabriela", 80.0, "Mid"),
        Participant::named(12, "Kio", 75.0, "Mid"),
        Participant::named(13, "Meghan", 50.0, "Mid"),
        Participant::named(14, "Donald", 60.0, "Def"),
        Participant::named(15, "Ernesto", 70.0, "Def"),
        Participant::named(16, "Bamba", 70.0, "Def"),
    ];

    Config {
        roster,
        min_players: Some(super::DEFAULT_MIN_PLAYERS),
        scoring: None,
        history: Some(HistoryConfig {
            max_entries: Some(crate::history::MAX_HISTORY),
            no_repeat_last_n: Some(crate::history::NO_REPEAT_LAST_N),
        }),
    }
}

/// Write the starter config to `path` (or the default location).
///
/// Refuses to replace an existing file unless `force` is set.
/// Returns the path written.
pub fn run_init(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p,
        None => super::get_config_path()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Pass --force to overwrite",
            path.display()
        );
    }

    write_config(&path, &starter_config())?;
    Ok(path)
}

/// Serialize `config` as YAML and write it atomically
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }
    }

    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(HEADER.as_bytes()).context("Failed to write config")?;
    file.write_all(yaml.as_bytes()).context("Failed to write config")?;
    file.commit().context("Failed to save config")?;

    Ok(())
}
