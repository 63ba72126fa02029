#![allow(dead_code)]

//! Skill Catalog Builder — the grouped, de-duplicated row axis of a
//! comparison grid.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::candidate::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogGroup {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered mapping from group name to its unique skill names. Groups appear
/// in the order their first accepted skill was seen and are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    groups: Vec<CatalogGroup>,
}

impl SkillCatalog {
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, group_name: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.name == group_name)
            .map(|g| g.skills.as_slice())
    }

    pub fn skill_count(&self) -> usize {
        self.groups.iter().map(|g| g.skills.len()).sum()
    }

    fn push(&mut self, group_name: &str, skill_name: &str) {
        match self.groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.skills.push(skill_name.to_string()),
            None => self.groups.push(CatalogGroup {
                name: group_name.to_string(),
                skills: vec![skill_name.to_string()],
            }),
        }
    }
}

/// Distinct skill names across all candidates, in first-seen order.
pub fn discover_skills(candidates: &[Candidate]) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .flat_map(|c| c.skill_groups())
        .flat_map(|g| g.skills.iter())
        .filter(|skill| seen.insert(skill.name.as_str()))
        .map(|skill| skill.name.clone())
        .collect()
}

/// Builds the catalog for `candidates`.
///
/// A non-empty `filter` restricts which skills are accepted; grouping always
/// comes from the candidates' own documents. An empty filter accepts every
/// skill present. A skill is listed once, under the first group it was
/// encountered in (candidates, then groups, then skills, in given order).
pub fn build_catalog(candidates: &[Candidate], filter: &[String]) -> SkillCatalog {
    let accepted: HashSet<&str> = filter.iter().map(String::as_str).collect();
    let accept_all = accepted.is_empty();

    let mut catalog = SkillCatalog::default();
    let mut placed: HashSet<&str> = HashSet::new();

    for candidate in candidates {
        for group in candidate.skill_groups() {
            for skill in &group.skills {
                let name = skill.name.as_str();
                if !accept_all && !accepted.contains(name) {
                    continue;
                }
                if placed.insert(name) {
                    catalog.push(&group.name, name);
                }
            }
        }
    }

    catalog
}
