//! Invariants of the split search over many seeded random rosters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use squad_split::scoring::score_split;
use squad_split::search::{partition_count, Partitions};
use squad_split::{search, MatchupHistory, MemoryStore, Participant, Signature, Weights};

fn random_roster(rng: &mut StdRng, n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| Participant::new(i as u32 + 1, rng.gen_range(20..=99) as f64))
        .collect()
}

/// Lowest score over every candidate, computed independently of the search
fn best_possible_score(players: &[Participant]) -> f64 {
    let n = players.len();
    let weights = Weights::default();
    Partitions::new(n, n.div_ceil(2))
        .map(|team_a| {
            let a: Vec<f64> = team_a.iter().map(|&i| players[i].skill).collect();
            let b: Vec<f64> = (0..n)
                .filter(|i| !team_a.contains(i))
                .map(|i| players[i].skill)
                .collect();
            score_split(&a, &b, &weights).score
        })
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_split_invariants_hold_for_random_rosters() {
    let mut roster_rng = StdRng::seed_from_u64(2024);

    for n in 2..=12 {
        for round in 0..15 {
            let players = random_roster(&mut roster_rng, n);
            let mut rng = StdRng::seed_from_u64(round);
            let split = search(&players, &[], &mut rng).unwrap();

            // Every participant exactly once
            assert_eq!(split.team_a.len() + split.team_b.len(), n);
            let ids: HashSet<u32> = split
                .team_a
                .iter()
                .chain(split.team_b.iter())
                .map(|p| p.id)
                .collect();
            assert_eq!(ids.len(), n);
            assert!(players.iter().all(|p| ids.contains(&p.id)));

            // Totals are exact for integral skills
            let sum: f64 = players.iter().map(|p| p.skill).sum();
            assert_eq!(split.total_a + split.total_b, sum);

            if n % 2 == 0 {
                assert_eq!(split.team_a.len(), n / 2);
                assert_eq!(split.team_b.len(), n / 2);
            } else {
                assert_eq!(split.team_a.len().abs_diff(split.team_b.len()), 1);
                let (big_avg, small_avg) = if split.team_a.len() > split.team_b.len() {
                    (split.avg_a, split.avg_b)
                } else {
                    (split.avg_b, split.avg_a)
                };
                assert!(big_avg <= small_avg, "n={} big {} small {}", n, big_avg, small_avg);
            }

            assert_eq!(
                split.signature,
                Signature::for_teams(&split.team_b, &split.team_a)
            );
            assert_eq!(split.rescore(&Weights::default()).score, split.score);
            assert_eq!(split.score, best_possible_score(&players));
        }
    }
}

#[test]
fn test_forbidding_result_changes_it_when_possible() {
    let mut roster_rng = StdRng::seed_from_u64(77);

    for n in 2..=10 {
        let players = random_roster(&mut roster_rng, n);
        let mut rng = StdRng::seed_from_u64(n as u64);
        let first = search(&players, &[], &mut rng).unwrap();
        let second = search(&players, &[first.signature.clone()], &mut rng).unwrap();

        if partition_count(n) > 1 {
            assert_ne!(first.signature, second.signature, "n = {}", n);
        } else {
            assert_eq!(first.signature, second.signature);
        }
    }
}

#[test]
fn test_history_driven_sessions_never_repeat_back_to_back() {
    let players: Vec<Participant> = [95.0, 85.0, 85.0, 85.0, 85.0, 80.0, 75.0, 70.0]
        .iter()
        .enumerate()
        .map(|(i, &s)| Participant::new(i as u32 + 1, s))
        .collect();

    let history = MatchupHistory::open(MemoryStore::new(), 5).unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    let mut previous: Option<Signature> = None;

    for _ in 0..12 {
        let split = search(&players, &history.recent(1), &mut rng).unwrap();
        if let Some(prev) = &previous {
            assert_ne!(&split.signature, prev);
        }
        history.record(split.signature.clone()).unwrap();
        previous = Some(split.signature);
    }
    assert_eq!(history.entries().len(), 5);
}
