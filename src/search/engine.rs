use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, warn};

use super::error::{SearchError, MIN_PARTICIPANTS};
use super::partition::{partition_count, Partitions};
use super::types::Split;
use crate::roster::Participant;
use crate::scoring::{SplitMetrics, Weights};
use crate::signature::Signature;

/// Rosters above this size get a warning: the search is exhaustive and grows
/// as C(n, n/2).
pub const LARGE_ROSTER_WARNING: usize = 24;

#[derive(Debug, Clone)]
struct Candidate {
    team_a: Vec<usize>, // indices into the participant slice
    score: f64,
    signature: Signature,
}

/// Split `participants` into the two fairest teams with the default policy.
///
/// See [`search_with_weights`].
pub fn search<R>(
    participants: &[Participant],
    forbidden: &[Signature],
    rng: &mut R,
) -> Result<Split, SearchError>
where
    R: Rng + ?Sized,
{
    search_with_weights(participants, forbidden, &Weights::default(), rng)
}

/// Split `participants` into the two fairest teams under `weights`.
///
/// Every grouping with the required team sizes is scored. The best-scoring
/// candidate whose signature is not in `forbidden` wins; exact ties among
/// those are broken with `rng`. If every candidate is forbidden, the overall
/// best is returned instead (a repeat beats no result).
///
/// With an odd count the larger team is always the one with the lower
/// average skill.
pub fn search_with_weights<R>(
    participants: &[Participant],
    forbidden: &[Signature],
    weights: &Weights,
    rng: &mut R,
) -> Result<Split, SearchError>
where
    R: Rng + ?Sized,
{
    let n = participants.len();
    if n < MIN_PARTICIPANTS {
        return Err(SearchError::InvalidInput(n));
    }
    if n > LARGE_ROSTER_WARNING {
        warn!(
            participants = n,
            candidates = %partition_count(n),
            "Large roster; exhaustive split search may be slow"
        );
    }

    let team_a_size = n.div_ceil(2);
    let forbidden: HashSet<&Signature> = forbidden.iter().collect();
    let skills: Vec<f64> = participants.iter().map(|p| p.skill).collect();

    let mut in_team_a = vec![false; n];
    let mut skills_a = Vec::with_capacity(team_a_size);
    let mut skills_b = Vec::with_capacity(n - team_a_size);

    let mut evaluated = 0usize;
    let mut best_any: Option<Candidate> = None;
    let mut best_allowed: Vec<Candidate> = Vec::new();

    for team_a in Partitions::new(n, team_a_size) {
        evaluated += 1;

        in_team_a.fill(false);
        for &i in &team_a {
            in_team_a[i] = true;
        }
        skills_a.clear();
        skills_b.clear();
        for (i, &skill) in skills.iter().enumerate() {
            if in_team_a[i] {
                skills_a.push(skill);
            } else {
                skills_b.push(skill);
            }
        }

        let score = weights.combine(&SplitMetrics::measure(&skills_a, &skills_b, weights));
        let signature = Signature::from_ids(
            team_a.iter().map(|&i| participants[i].id),
            (0..n).filter(|&i| !in_team_a[i]).map(|i| participants[i].id),
        );
        let candidate = Candidate {
            team_a,
            score,
            signature,
        };

        // First best in enumeration order, used only if everything is forbidden
        if best_any.as_ref().map_or(true, |b| score < b.score) {
            best_any = Some(candidate.clone());
        }

        if forbidden.contains(&candidate.signature) {
            continue;
        }
        match best_allowed.first().map(|c| c.score) {
            Some(best) if score > best => {}
            Some(best) if score == best => best_allowed.push(candidate),
            _ => {
                best_allowed.clear();
                best_allowed.push(candidate);
            }
        }
    }

    debug!(
        participants = n,
        evaluated,
        tied = best_allowed.len(),
        "Scored candidate splits"
    );

    let chosen = if best_allowed.is_empty() {
        let fallback = best_any.ok_or(SearchError::NoSolution(n))?;
        warn!(
            signature = %fallback.signature,
            "Every candidate split repeats a recent matchup; allowing a repeat"
        );
        fallback
    } else {
        best_allowed
            .choose(rng)
            .cloned()
            .ok_or(SearchError::NoSolution(n))?
    };

    let mut split = build_split(participants, &chosen.team_a, weights);

    if n % 2 == 1 {
        let a_is_bigger = split.team_a.len() > split.team_b.len();
        let a_is_weaker = split.avg_a < split.avg_b;
        if a_is_bigger != a_is_weaker {
            debug!("Swapping team labels so the weaker team takes the extra player");
            split = split.swapped(weights);
        }
    }

    Ok(split)
}

fn build_split(participants: &[Participant], team_a: &[usize], weights: &Weights) -> Split {
    let (a, b): (Vec<_>, Vec<_>) = participants
        .iter()
        .enumerate()
        .partition(|(i, _)| team_a.contains(i));

    Split::from_teams(
        a.into_iter().map(|(_, p)| p.clone()).collect(),
        b.into_iter().map(|(_, p)| p.clone()).collect(),
        weights,
    )
}
