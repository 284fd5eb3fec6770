/// Enumerates every Team-A index set of a fixed size exactly once.
///
/// When both teams have the same size, index 0 is pinned into Team A so a
/// split and its mirror image are never both produced. Index sets come out
/// ascending, in lexicographic order.
#[derive(Debug, Clone)]
pub struct Partitions {
    n: usize,
    fixed_first: bool,
    current: Option<Vec<usize>>,
}

impl Partitions {
    pub fn new(n: usize, team_a_size: usize) -> Self {
        let fixed_first = team_a_size > 0 && team_a_size * 2 == n;
        let start = usize::from(fixed_first);
        let free = team_a_size - start;

        let current = if team_a_size <= n {
            Some((start..start + free).collect())
        } else {
            None
        };

        Self {
            n,
            fixed_first,
            current,
        }
    }
}

impl Iterator for Partitions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.n;
        let fixed_first = self.fixed_first;
        let current = self.current.as_mut()?;

        let mut team = Vec::with_capacity(current.len() + 1);
        if fixed_first {
            team.push(0);
        }
        team.extend_from_slice(current);

        if !advance(current, n) {
            self.current = None;
        }
        Some(team)
    }
}

/// Step a k-combination of `0..n` to its lexicographic successor.
/// Returns false once the last combination has been passed.
fn advance(combo: &mut [usize], n: usize) -> bool {
    let k = combo.len();
    for i in (0..k).rev() {
        if combo[i] < n - k + i {
            combo[i] += 1;
            for j in i + 1..k {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Number of candidate splits the search evaluates for `n` participants:
/// C(n, n/2) / 2 for even n, C(n, ceil(n/2)) for odd n. Saturates at `u128::MAX`.
pub fn partition_count(n: usize) -> u128 {
    if n == 0 {
        return 1;
    }
    let team_a_size = n.div_ceil(2);
    if team_a_size * 2 == n {
        binomial(n - 1, team_a_size - 1)
    } else {
        binomial(n, team_a_size)
    }
}

fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = match result.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_even_split_pins_first_index() {
        let all: Vec<Vec<usize>> = Partitions::new(4, 2).collect();
        assert_eq!(all, vec![vec![0, 1], vec![0, 2], vec![0, 3]]);
    }

    #[test]
    fn test_odd_split_enumerates_all_subsets() {
        let all: Vec<Vec<usize>> = Partitions::new(3, 2).collect();
        assert_eq!(all, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_two_participants_single_candidate() {
        let all: Vec<Vec<usize>> = Partitions::new(2, 1).collect();
        assert_eq!(all, vec![vec![0]]);
    }

    #[test]
    fn test_counts_match_formula() {
        for n in 2..=14 {
            let produced = Partitions::new(n, n.div_ceil(2)).count() as u128;
            assert_eq!(produced, partition_count(n), "n = {}", n);
        }
        assert_eq!(partition_count(8), 35);
        assert_eq!(partition_count(9), 126);
        assert_eq!(partition_count(16), 6435);
    }

    #[test]
    fn test_no_duplicate_groupings() {
        let n = 8;
        let mut seen = HashSet::new();
        for team in Partitions::new(n, 4) {
            assert_eq!(team.len(), 4);
            assert!(team.windows(2).all(|w| w[0] < w[1]));
            let mut mirror: Vec<usize> = (0..n).filter(|i| !team.contains(i)).collect();
            mirror.sort_unstable();
            assert!(!seen.contains(&mirror), "mirror of {:?} already produced", team);
            assert!(seen.insert(team));
        }
    }

    #[test]
    fn test_binomial_saturates() {
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(partition_count(400), u128::MAX);
    }
}
