use serde::{Deserialize, Serialize};

use crate::roster::types::{average_skill, total_skill};
use crate::roster::Participant;
use crate::scoring::{score_split, ScoreResult, SplitMetrics, Weights};
use crate::signature::Signature;

/// Two teams partitioning the selected participants, with derived totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub team_a: Vec<Participant>,
    pub team_b: Vec<Participant>,
    pub total_a: f64,
    pub total_b: f64,
    pub avg_a: f64,
    pub avg_b: f64,
    pub score: f64,
    pub signature: Signature,
}

impl Split {
    /// Build a split, deriving totals, averages, score and signature from the teams
    pub fn from_teams(
        team_a: Vec<Participant>,
        team_b: Vec<Participant>,
        weights: &Weights,
    ) -> Self {
        let skills_a = skills(&team_a);
        let skills_b = skills(&team_b);
        let score = weights.combine(&SplitMetrics::measure(&skills_a, &skills_b, weights));

        Self {
            total_a: total_skill(&team_a),
            total_b: total_skill(&team_b),
            avg_a: average_skill(&team_a),
            avg_b: average_skill(&team_b),
            signature: Signature::for_teams(&team_a, &team_b),
            score,
            team_a,
            team_b,
        }
    }

    /// Exchange the team labels. Derived fields are recomputed from scratch.
    pub fn swapped(self, weights: &Weights) -> Self {
        Self::from_teams(self.team_b, self.team_a, weights)
    }

    /// Score the teams again with a per-factor breakdown
    pub fn rescore(&self, weights: &Weights) -> ScoreResult {
        score_split(&skills(&self.team_a), &skills(&self.team_b), weights)
    }

    pub fn len(&self) -> usize {
        self.team_a.len() + self.team_b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_diff(&self) -> f64 {
        (self.total_a - self.total_b).abs()
    }

    pub fn avg_diff(&self) -> f64 {
        (self.avg_a - self.avg_b).abs()
    }
}

fn skills(team: &[Participant]) -> Vec<f64> {
    team.iter().map(|p| p.skill).collect()
}
