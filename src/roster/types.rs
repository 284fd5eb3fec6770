use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u32,
    pub skill: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>, // carried through, never scored
}

impl Participant {
    pub fn new(id: u32, skill: f64) -> Self {
        Self {
            id,
            skill,
            name: None,
            position: None,
        }
    }

    pub fn named(id: u32, name: &str, skill: f64, position: &str) -> Self {
        Self {
            id,
            skill,
            name: Some(name.to_string()),
            position: Some(position.to_string()),
        }
    }

    /// Name for display, falling back to "#<id>"
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.id),
        }
    }
}

/// Sum of skills
pub fn total_skill(team: &[Participant]) -> f64 {
    team.iter().map(|p| p.skill).sum()
}

/// Mean skill, 0 for an empty team
pub fn average_skill(team: &[Participant]) -> f64 {
    if team.is_empty() {
        0.0
    } else {
        total_skill(team) / team.len() as f64
    }
}
