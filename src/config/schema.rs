use serde::{Deserialize, Serialize};

use crate::history::{MAX_HISTORY, NO_REPEAT_LAST_N};
use crate::roster::Participant;
use crate::scoring::ScoringConfig;

/// Fewest selected players the CLI will split. A product rule, not an engine limit.
pub const DEFAULT_MIN_PLAYERS: usize = 8;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub roster: Vec<Participant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryConfig>,
}

impl Config {
    pub fn min_players(&self) -> usize {
        self.min_players.unwrap_or(DEFAULT_MIN_PLAYERS)
    }

    pub fn max_history(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|h| h.max_entries)
            .unwrap_or(MAX_HISTORY)
    }

    pub fn no_repeat_last_n(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|h| h.no_repeat_last_n)
            .unwrap_or(NO_REPEAT_LAST_N)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    /// Signatures kept on disk (default 50)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,

    /// Trailing signatures the next split must avoid (default 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_repeat_last_n: Option<usize>,
}
