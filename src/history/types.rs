use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::signature::Signature;

/// Current on-disk format version
pub const HISTORY_VERSION: u32 = 1;

/// Most signatures kept; older ones are evicted first
pub const MAX_HISTORY: usize = 50;

/// How many trailing signatures the next search must avoid
pub const NO_REPEAT_LAST_N: usize = 1;

/// Ordered record of accepted matchups, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    pub version: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryState {
    /// Create a new empty history with version 1
    pub fn new() -> Self {
        Self {
            version: HISTORY_VERSION,
            updated_at: None,
            signatures: Vec::new(),
        }
    }

    /// The last `k` signatures, oldest to newest
    pub fn recent(&self, k: usize) -> &[Signature] {
        let start = self.signatures.len().saturating_sub(k);
        &self.signatures[start..]
    }

    /// Append a signature, then evict from the front until at most `cap` remain
    pub fn push(&mut self, signature: Signature, cap: usize) {
        self.signatures.push(signature);
        self.truncate_to(cap);
        self.updated_at = Some(Utc::now());
    }

    /// Drop the oldest entries until at most `cap` remain
    pub fn truncate_to(&mut self, cap: usize) {
        if self.signatures.len() > cap {
            let excess = self.signatures.len() - cap;
            self.signatures.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.signatures.clear();
        self.updated_at = Some(Utc::now());
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
