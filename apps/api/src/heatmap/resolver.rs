//! Score Resolver — a candidate's consensus level for one named skill.

use serde::Serialize;

use crate::heatmap::palette::Level;
use crate::models::candidate::{Candidate, SkillEntry};

/// Returns the candidate's level for `skill_name`, or zero when the
/// candidate has no document, no such skill, or no score records.
///
/// Groups and skills are scanned in document order; the first exact,
/// case-sensitive name match decides the result, even if it is unscored.
pub fn resolve_level(candidate: &Candidate, skill_name: &str) -> Level {
    find_skill(candidate, skill_name)
        .and_then(SkillEntry::first_score)
        .map(Level::from_score)
        .unwrap_or_default()
}

fn find_skill<'a>(candidate: &'a Candidate, skill_name: &str) -> Option<&'a SkillEntry> {
    candidate
        .skill_groups()
        .iter()
        .flat_map(|group| group.skills.iter())
        .find(|skill| skill.name == skill_name)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillScore {
    pub skill: String,
    pub level: Level,
}

/// Every scored skill of the candidate in document order. Unscored skills
/// are omitted; a repeated name keeps its first occurrence, matching
/// `resolve_level`.
pub fn score_sheet(candidate: &Candidate) -> Vec<SkillScore> {
    let mut seen: Vec<&str> = Vec::new();
    let mut sheet = Vec::new();

    for skill in candidate.skill_groups().iter().flat_map(|g| g.skills.iter()) {
        if seen.contains(&skill.name.as_str()) {
            continue;
        }
        seen.push(&skill.name);
        if let Some(score) = skill.first_score() {
            sheet.push(SkillScore {
                skill: skill.name.clone(),
                level: Level::from_score(score),
            });
        }
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::test_support::{candidate, group, scored, unscored};

    #[test]
    fn test_no_document_resolves_to_zero() {
        let c = Candidate {
            id: "x".into(),
            name: "No Data".into(),
            ..Default::default()
        };
        assert_eq!(resolve_level(&c, "JavaScript"), Level::MIN);
        assert_eq!(resolve_level(&c, "Teamwork"), Level::MIN);
    }

    #[test]
    fn test_scored_skill_returns_first_record() {
        let a = candidate(
            "a",
            "Ada",
            vec![group("Technical Skills", vec![scored("JavaScript", &[4.0, 1.0])])],
        );
        assert_eq!(resolve_level(&a, "JavaScript").value(), 4);
    }

    #[test]
    fn test_unscored_skill_resolves_to_zero() {
        let b = candidate(
            "b",
            "Bo",
            vec![group("Technical Skills", vec![unscored("JavaScript")])],
        );
        assert_eq!(resolve_level(&b, "JavaScript"), Level::MIN);
    }

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let c = candidate(
            "c",
            "Cy",
            vec![group(
                "Technical Skills",
                vec![scored("React", &[5.0]), scored("Go", &[-2.0])],
            )],
        );
        assert_eq!(resolve_level(&c, "React"), Level::MAX);
        assert_eq!(resolve_level(&c, "Go"), Level::MIN);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let c = candidate(
            "c",
            "Cy",
            vec![group("Technical Skills", vec![scored("React", &[3.0])])],
        );
        assert_eq!(resolve_level(&c, "react"), Level::MIN);
        assert_eq!(resolve_level(&c, "React ").value(), 0);
    }

    #[test]
    fn test_first_match_wins_across_groups() {
        let c = candidate(
            "c",
            "Cy",
            vec![
                group("Technical Skills", vec![scored("Communication", &[1.0])]),
                group("Soft Skills", vec![scored("Communication", &[4.0])]),
            ],
        );
        assert_eq!(resolve_level(&c, "Communication").value(), 1);
    }

    #[test]
    fn test_unscored_first_match_shadows_later_score() {
        let c = candidate(
            "c",
            "Cy",
            vec![
                group("Technical Skills", vec![unscored("Teamwork")]),
                group("Soft Skills", vec![scored("Teamwork", &[4.0])]),
            ],
        );
        assert_eq!(resolve_level(&c, "Teamwork"), Level::MIN);
    }

    #[test]
    fn test_score_sheet_skips_unscored_and_repeats() {
        let c = candidate(
            "c",
            "Cy",
            vec![
                group(
                    "Technical Skills",
                    vec![scored("Rust", &[3.0]), unscored("Go"), scored("Zig", &[7.0])],
                ),
                group("Soft Skills", vec![scored("Rust", &[1.0])]),
            ],
        );
        let sheet = score_sheet(&c);
        let names: Vec<_> = sheet.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Zig"]);
        assert_eq!(sheet[0].level.value(), 3);
        assert_eq!(sheet[1].level, Level::MAX);
    }
}
