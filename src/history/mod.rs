pub mod storage;
pub mod types;

pub use storage::{
    get_history_path, load_history_state, save_history_state, HistoryStore, JsonFileStore,
    MemoryStore,
};
pub use types::{HistoryState, HISTORY_VERSION, MAX_HISTORY, NO_REPEAT_LAST_N};

use anyhow::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use crate::signature::Signature;

/// Session-wide record of accepted matchups.
///
/// Construct once with its store and pass by reference to whoever reads or
/// records. A mutex serialises access so appends stay ordered and capped.
#[derive(Debug)]
pub struct MatchupHistory<S: HistoryStore> {
    store: S,
    cap: usize,
    state: Mutex<HistoryState>,
}

impl<S: HistoryStore> MatchupHistory<S> {
    /// Load the stored history. Entries beyond `cap` are dropped, oldest first.
    pub fn open(store: S, cap: usize) -> Result<Self> {
        let mut state = store.load()?;
        let loaded = state.len();
        state.truncate_to(cap);
        debug!(loaded, kept = state.len(), cap, "Opened matchup history");

        Ok(Self {
            store,
            cap,
            state: Mutex::new(state),
        })
    }

    /// The last `k` signatures, oldest to newest
    pub fn recent(&self, k: usize) -> Vec<Signature> {
        self.lock().recent(k).to_vec()
    }

    /// Append `signature` and persist. At most `cap` entries remain afterwards.
    ///
    /// The in-memory state is only updated once the store accepts the write.
    pub fn record(&self, signature: Signature) -> Result<()> {
        let mut state = self.lock();
        let mut next = state.clone();
        next.push(signature.clone(), self.cap);
        self.store.save(&next)?;
        *state = next;
        info!(%signature, entries = state.len(), "Recorded matchup");
        Ok(())
    }

    /// Forget every stored matchup
    pub fn clear(&self) -> Result<()> {
        let mut state = self.lock();
        let mut next = state.clone();
        next.clear();
        self.store.save(&next)?;
        *state = next;
        Ok(())
    }

    /// All stored signatures, oldest first
    pub fn entries(&self) -> Vec<Signature> {
        self.lock().signatures.clone()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
