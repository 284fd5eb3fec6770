use anyhow::{bail, Result};
use std::collections::{BTreeMap, HashSet};

use super::types::Participant;

/// Position bucket for participants without one
pub const NO_POSITION: &str = "-";

/// Pick the participants with the given ids, in roster order.
///
/// Repeated ids collapse to one. An empty `ids` selects the whole roster.
/// Fails if any requested id is not on the roster.
pub fn select_participants(roster: &[Participant], ids: &[u32]) -> Result<Vec<Participant>> {
    if ids.is_empty() {
        return Ok(roster.to_vec());
    }

    let wanted: HashSet<u32> = ids.iter().copied().collect();
    let known: HashSet<u32> = roster.iter().map(|p| p.id).collect();

    let mut missing: Vec<u32> = wanted.difference(&known).copied().collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        let list = missing
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        bail!("Unknown participant id(s): {}", list);
    }

    Ok(roster
        .iter()
        .filter(|p| wanted.contains(&p.id))
        .cloned()
        .collect())
}

/// Order by skill descending; equal skills keep their relative order
pub fn sort_by_skill_desc(participants: &mut [Participant]) {
    participants.sort_by(|a, b| b.skill.total_cmp(&a.skill));
}

/// Group participants by position, each group ordered by skill descending
pub fn group_by_position(roster: &[Participant]) -> BTreeMap<String, Vec<&Participant>> {
    let mut groups: BTreeMap<String, Vec<&Participant>> = BTreeMap::new();
    for p in roster {
        let key = p.position.clone().unwrap_or_else(|| NO_POSITION.to_string());
        groups.entry(key).or_default().push(p);
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| b.skill.total_cmp(&a.skill));
    }
    groups
}
