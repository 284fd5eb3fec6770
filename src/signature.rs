use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roster::Participant;

/// Separator between the two team halves of a signature
pub const TEAM_SEPARATOR: char = '|';

/// Canonical identifier of a team split.
///
/// Built from the participant ids of both teams: each side is its ids sorted
/// ascending and joined with `-`, and the lexicographically smaller side comes
/// first. Swapping the teams or reordering members yields the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    /// Derive the signature for a pair of teams
    pub fn for_teams(team_a: &[Participant], team_b: &[Participant]) -> Self {
        Self::from_ids(team_a.iter().map(|p| p.id), team_b.iter().map(|p| p.id))
    }

    /// Derive the signature from two id sets
    pub fn from_ids<A, B>(ids_a: A, ids_b: B) -> Self
    where
        A: IntoIterator<Item = u32>,
        B: IntoIterator<Item = u32>,
    {
        let a = join_sorted(ids_a);
        let b = join_sorted(ids_b);
        if a < b {
            Signature(format!("{}{}{}", a, TEAM_SEPARATOR, b))
        } else {
            Signature(format!("{}{}{}", b, TEAM_SEPARATOR, a))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn join_sorted<I: IntoIterator<Item = u32>>(ids: I) -> String {
    let mut ids: Vec<u32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Signature {
    fn from(s: String) -> Self {
        Signature(s)
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Signature(s.to_string())
    }
}
