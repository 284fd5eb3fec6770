use std::collections::BTreeMap;
use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::roster::Participant;
use crate::scoring::ScoreResult;
use crate::search::Split;
use crate::signature::Signature;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a skill value: whole numbers without decimals, others to one place
pub fn format_skill(skill: f64) -> String {
    if skill.fract() == 0.0 {
        format!("{:.0}", skill)
    } else {
        format!("{:.1}", skill)
    }
}

fn member_line(p: &Participant, use_colors: bool) -> String {
    let position = p.position.as_deref().unwrap_or("");
    if use_colors {
        format!(
            "  {:>5}  {} {}",
            format_skill(p.skill).bold(),
            p.display_name(),
            position.dimmed()
        )
    } else {
        format!("  {:>5}  {} {}", format_skill(p.skill), p.display_name(), position)
            .trim_end()
            .to_string()
    }
}

fn by_skill_desc(team: &[Participant]) -> Vec<&Participant> {
    let mut members: Vec<&Participant> = team.iter().collect();
    members.sort_by(|a, b| b.skill.total_cmp(&a.skill));
    members
}

fn format_team(
    label: &str,
    team: &[Participant],
    avg: f64,
    total: f64,
    use_colors: bool,
) -> String {
    let heading = format!("Team {} ({})", label, team.len());
    let stats = format!("Avg {:.1}  Tot {}", avg, format_skill(total));

    let mut lines = Vec::with_capacity(team.len() + 1);
    if use_colors {
        lines.push(format!("{}  {}", heading.bold(), stats.cyan()));
    } else {
        lines.push(format!("{}  {}", heading, stats));
    }
    lines.extend(by_skill_desc(team).into_iter().map(|p| member_line(p, use_colors)));
    lines.join("\n")
}

/// Format a split as two team blocks followed by the balance summary
pub fn format_split(split: &Split, use_colors: bool) -> String {
    let team_a = format_team("A", &split.team_a, split.avg_a, split.total_a, use_colors);
    let team_b = format_team("B", &split.team_b, split.avg_b, split.total_b, use_colors);

    let summary = format!(
        "Avg. diff: {:.1}\nTotal diff: {}",
        split.avg_diff(),
        format_skill(split.total_diff())
    );
    let summary = if use_colors {
        summary.yellow().to_string()
    } else {
        summary
    };

    format!("{}\n\n{}\n\n{}", team_a, team_b, summary)
}

/// Format the per-factor score breakdown (for verbose mode)
pub fn format_breakdown(result: &ScoreResult) -> String {
    let mut lines = vec![format!("Score: {}", format_skill(result.score))];
    for f in &result.breakdown.factors {
        lines.push(format!(
            "  {:<17} {:>8} x {:<6} = {}",
            f.label,
            format_skill(f.raw),
            format_skill(f.weight),
            format_skill(f.contribution)
        ));
    }
    lines.join("\n")
}

/// Format a split as TSV: team, id, name, position, skill
pub fn format_tsv(split: &Split) -> String {
    let rows = [("A", &split.team_a), ("B", &split.team_b)];
    rows.iter()
        .flat_map(|(label, team)| {
            team.iter().map(move |p| {
                format!(
                    "{}\t{}\t{}\t{}\t{}",
                    label,
                    p.id,
                    p.name.as_deref().unwrap_or(""),
                    p.position.as_deref().unwrap_or(""),
                    format_skill(p.skill)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a split as pretty JSON
pub fn format_json(split: &Split) -> Result<String> {
    serde_json::to_string_pretty(split).context("Failed to serialize split")
}

/// Format the roster grouped by position
pub fn format_roster(groups: &BTreeMap<String, Vec<&Participant>>, use_colors: bool) -> String {
    if groups.is_empty() {
        return "Roster is empty.".to_string();
    }

    groups
        .iter()
        .map(|(position, members)| {
            let heading = position.to_uppercase();
            let heading = if use_colors {
                heading.bold().to_string()
            } else {
                heading
            };
            let mut lines = vec![heading];
            lines.extend(members.iter().map(|p| {
                format!("  {:>3}  {:>5}  {}", p.id, format_skill(p.skill), p.display_name())
            }));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format stored signatures, newest last, numbered from the oldest
/// List recorded matchups oldest first, under a header showing how many are kept
pub fn format_history(entries: &[Signature], cap: usize) -> String {
    if entries.is_empty() {
        return "No matchups recorded.".to_string();
    }

    let mut lines = vec![format!("Recent matchups ({} of {} kept)", entries.len(), cap)];
    lines.extend(
        entries
            .iter()
            .enumerate()
            .map(|(i, sig)| format!("{:>3}. {}", i + 1, sig)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::group_by_position;
    use crate::scoring::Weights;

    fn sample_split() -> Split {
        Split::from_teams(
            vec![
                Participant::named(1, "Cesc", 95.0, "Mid"),
                Participant::named(6, "Carl", 60.0, "Def"),
            ],
            vec![
                Participant::named(3, "Soufiane", 85.0, "Fwd"),
                Participant::new(9, 70.0),
            ],
            &Weights::default(),
        )
    }

    #[test]
    fn test_format_skill() {
        assert_eq!(format_skill(85.0), "85");
        assert_eq!(format_skill(82.34), "82.3");
        assert_eq!(format_skill(0.0), "0");
    }

    #[test]
    fn test_format_split_plain() {
        let output = format_split(&sample_split(), false);
        assert!(output.contains("Team A (2)  Avg 77.5  Tot 155"));
        assert!(output.contains("Team B (2)  Avg 77.5  Tot 155"));
        assert!(output.contains("   95  Cesc Mid"));
        assert!(output.contains("   70  #9"));
        assert!(output.contains("Avg. diff: 0.0"));
        assert!(output.contains("Total diff: 0"));
    }

    #[test]
    fn test_format_split_members_by_skill() {
        let output = format_split(&sample_split(), false);
        let cesc = output.find("Cesc").unwrap();
        let carl = output.find("Carl").unwrap();
        assert!(cesc < carl);
    }

    #[test]
    fn test_format_tsv() {
        let output = format_tsv(&sample_split());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "A\t1\tCesc\tMid\t95");
        assert_eq!(lines[3], "B\t9\t\t\t70");
    }

    #[test]
    fn test_format_json_has_signature() {
        let json = format_json(&sample_split()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["signature"], "1-6|3-9");
        assert_eq!(value["team_a"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_format_breakdown() {
        let split = sample_split();
        let output = format_breakdown(&split.rescore(&Weights::default()));
        assert!(output.starts_with("Score: "));
        assert!(output.contains("Elite stacking"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn test_format_roster() {
        let roster = vec![
            Participant::named(1, "Cesc", 95.0, "Mid"),
            Participant::named(6, "Carl", 60.0, "Def"),
        ];
        let output = format_roster(&group_by_position(&roster), false);
        assert!(output.starts_with("DEF"));
        assert!(output.contains("MID\n    1     95  Cesc"));
    }

    #[test]
    fn test_format_history() {
        assert_eq!(format_history(&[], 50), "No matchups recorded.");
        let output = format_history(&[Signature::from("1|2"), Signature::from("1-2|3-4")], 50);
        assert_eq!(output, "Recent matchups (2 of 50 kept)\n  1. 1|2\n  2. 1-2|3-4");
    }
}
