//! Read-only views assembled from the resolver, catalog and palette.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::heatmap::catalog::build_catalog;
use crate::heatmap::palette::{Level, Palette};
use crate::heatmap::resolver::resolve_level;
use crate::identity::initials;
use crate::models::candidate::Candidate;

#[derive(Debug, Clone, Serialize)]
pub struct LegendSwatch {
    pub level: Level,
    pub color: &'static str,
    pub selected: bool,
}

/// One candidate's level for one skill, with the full legend.
#[derive(Debug, Clone, Serialize)]
pub struct SkillSnapshot {
    pub candidate_id: String,
    pub name: String,
    pub skill: String,
    pub level: Level,
    pub color: &'static str,
    pub legend: Vec<LegendSwatch>,
}

pub fn skill_snapshot(candidate: &Candidate, skill: &str, palette: &Palette) -> SkillSnapshot {
    let level = resolve_level(candidate, skill);
    let legend = Level::all()
        .map(|rung| LegendSwatch {
            level: rung,
            color: palette.color(rung),
            selected: rung == level,
        })
        .collect();

    SkillSnapshot {
        candidate_id: candidate.id.clone(),
        name: candidate.name.clone(),
        skill: skill.to_string(),
        level,
        color: palette.color(level),
        legend,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GridColumn {
    pub id: String,
    pub name: String,
    pub initials: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub candidate_id: String,
    pub level: Level,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub skill: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridGroup {
    pub name: String,
    pub rows: Vec<GridRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonGrid {
    pub columns: Vec<GridColumn>,
    pub groups: Vec<GridGroup>,
    pub generated_at: DateTime<Utc>,
}

/// Candidates as columns, catalog skills as rows; one cell per pair.
pub fn comparison_grid(
    candidates: &[Candidate],
    skill_filter: &[String],
    palette: &Palette,
) -> ComparisonGrid {
    let columns = candidates
        .iter()
        .map(|c| GridColumn {
            id: c.id.clone(),
            name: c.name.clone(),
            initials: initials(&c.name),
        })
        .collect();

    let groups = build_catalog(candidates, skill_filter)
        .groups()
        .iter()
        .map(|group| GridGroup {
            name: group.name.clone(),
            rows: group
                .skills
                .iter()
                .map(|skill| GridRow {
                    skill: skill.clone(),
                    cells: candidates
                        .iter()
                        .map(|c| {
                            let level = resolve_level(c, skill);
                            GridCell {
                                candidate_id: c.id.clone(),
                                level,
                                color: palette.color(level),
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    ComparisonGrid {
        columns,
        groups,
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heatmap::test_support::{candidate, group, scored, unscored};

    fn pair() -> Vec<Candidate> {
        vec![
            candidate(
                "a",
                "Ada Lovelace",
                vec![
                    group("Technical Skills", vec![scored("JavaScript", &[4.0])]),
                    group("Soft Skills", vec![scored("Teamwork", &[2.0])]),
                ],
            ),
            candidate(
                "b",
                "bo brown",
                vec![group(
                    "Technical Skills",
                    vec![unscored("JavaScript"), scored("Rust", &[9.0])],
                )],
            ),
        ]
    }

    #[test]
    fn test_snapshot_marks_exactly_one_legend_entry() {
        let candidates = pair();
        let snap = skill_snapshot(&candidates[0], "JavaScript", &Palette::default());
        assert_eq!(snap.level.value(), 4);
        assert_eq!(snap.color, "#4caf50");
        assert_eq!(snap.legend.len(), 5);
        let selected: Vec<_> = snap.legend.iter().filter(|s| s.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].level, snap.level);
    }

    #[test]
    fn test_snapshot_for_missing_skill_is_zero() {
        let candidates = pair();
        let snap = skill_snapshot(&candidates[1], "Teamwork", &Palette::default());
        assert_eq!(snap.level, Level::MIN);
        assert_eq!(snap.color, "#ffffff");
        assert!(snap.legend[0].selected);
    }

    #[test]
    fn test_grid_has_cell_per_candidate_per_row() {
        let candidates = pair();
        let grid = comparison_grid(&candidates, &[], &Palette::default());

        assert_eq!(grid.columns.len(), 2);
        assert_eq!(grid.columns[1].initials, "BB");

        let rows: Vec<_> = grid.groups.iter().flat_map(|g| &g.rows).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.cells.len() == 2));

        let js = rows.iter().find(|r| r.skill == "JavaScript").unwrap();
        assert_eq!(js.cells[0].level.value(), 4);
        assert_eq!(js.cells[1].level, Level::MIN);

        let rust = rows.iter().find(|r| r.skill == "Rust").unwrap();
        assert_eq!(rust.cells[0].level, Level::MIN);
        assert_eq!(rust.cells[1].level, Level::MAX);
    }

    #[test]
    fn test_grid_respects_filter() {
        let candidates = pair();
        let grid = comparison_grid(&candidates, &["Teamwork".to_string()], &Palette::default());
        assert_eq!(grid.groups.len(), 1);
        assert_eq!(grid.groups[0].name, "Soft Skills");
        assert_eq!(grid.groups[0].rows[0].cells[1].color, "#ffffff");
    }

    #[test]
    fn test_empty_grid() {
        let grid = comparison_grid(&[], &[], &Palette::default());
        assert!(grid.columns.is_empty());
        assert!(grid.groups.is_empty());
    }
}
