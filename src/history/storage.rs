use super::types::{HistoryState, HISTORY_VERSION};
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Get the default history file path (~/.config/squad-split/history.json)
pub fn get_history_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("history.json"))
}

/// Durable medium behind a [`super::MatchupHistory`]
pub trait HistoryStore {
    fn load(&self) -> Result<HistoryState>;
    fn save(&self, state: &HistoryState) -> Result<()>;
}

/// History kept as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<HistoryState> {
        load_history_state(&self.path)
    }

    fn save(&self, state: &HistoryState) -> Result<()> {
        save_history_state(&self.path, state)
    }
}

/// History that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<HistoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state
    pub fn with_state(state: HistoryState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<HistoryState> {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, state: &HistoryState) -> Result<()> {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(state.clone());
        Ok(())
    }
}

/// Load history from a JSON file
///
/// If the file doesn't exist, returns a new empty history.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_history_state(path: &Path) -> Result<HistoryState> {
    if !path.exists() {
        return Ok(HistoryState::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open history file at {}", path.display()))?;

    let state: HistoryState = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse history file at {}", path.display()))?;

    if state.version != HISTORY_VERSION {
        anyhow::bail!("Unsupported history version: {}", state.version);
    }

    Ok(state)
}

/// Save history to a JSON file atomically
///
/// The file is never left half-written. Creates the parent directory if needed.
pub fn save_history_state(path: &Path, state: &HistoryState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, state).context("Failed to serialize history")?;

    file.commit().context("Failed to save history")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::types::MAX_HISTORY;
    use crate::signature::Signature;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = load_history_state(&dir.path().join("missing.json")).unwrap();
        assert_eq!(state.version, 1);
        assert!(state.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut state = HistoryState::new();
        state.push(Signature::from("1-4|2-3"), MAX_HISTORY);
        state.push(Signature::from("1-3|2-4"), MAX_HISTORY);
        save_history_state(&path, &state).unwrap();

        let loaded = load_history_state(&path).unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.recent(1), &[Signature::from("1-3|2-4")]);
    }

    #[test]
    fn test_file_is_plain_signature_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut state = HistoryState::new();
        state.push(Signature::from("1|2"), MAX_HISTORY);
        save_history_state(&path, &state).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["signatures"], serde_json::json!(["1|2"]));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, r#"{"version": 9, "signatures": []}"#).unwrap();
        let err = load_history_state(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported history version"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_history_state(&path).is_err());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        let mut state = HistoryState::new();
        state.push(Signature::from("1|2"), MAX_HISTORY);
        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), state);
    }
}
