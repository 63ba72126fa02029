//! Axum route handlers for the roster and heatmap API.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::heatmap::catalog::discover_skills;
use crate::heatmap::resolver::{score_sheet, SkillScore};
use crate::heatmap::views::{comparison_grid, skill_snapshot, ComparisonGrid, SkillSnapshot};
use crate::identity::initials;
use crate::models::candidate::Candidate;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CandidateSummary {
    pub id: String,
    pub name: String,
    pub initials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub has_skillset: bool,
    pub skill_count: usize,
}

impl From<&Candidate> for CandidateSummary {
    fn from(c: &Candidate) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            initials: initials(&c.name),
            email: c.email.clone(),
            has_skillset: c.has_skillset(),
            skill_count: c.skill_count(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
    pub default_skill: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillQuery {
    pub skill: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreSheetResponse {
    pub candidate_id: String,
    pub scores: Vec<SkillScore>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompareRequest {
    /// Empty compares the whole roster; otherwise only these ids, in order.
    #[serde(default)]
    pub candidate_ids: Vec<String>,
    /// Empty lists every skill present.
    #[serde(default)]
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/people
pub async fn handle_list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateSummary>>, AppError> {
    let roster = state.source.list_candidates().await?;
    let loaded = roster.iter().filter(|c| c.has_skillset()).count();
    info!(
        "{loaded} out of {} people have skillset data loaded ({} source)",
        roster.len(),
        state.source.backend()
    );
    Ok(Json(roster.iter().map(CandidateSummary::from).collect()))
}

/// GET /api/v1/people/:id
pub async fn handle_get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    Ok(Json(find_candidate(&state, &id).await?))
}

/// GET /api/v1/skills
///
/// Distinct skills across the roster, first-seen order. The first one is the
/// default selection for the individual view.
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<SkillListResponse>, AppError> {
    let roster = state.source.list_candidates().await?;
    let skills = discover_skills(&roster);
    debug!("Discovered {} unique skills", skills.len());
    Ok(Json(SkillListResponse {
        default_skill: skills.first().cloned(),
        skills,
    }))
}

/// GET /api/v1/people/:id/heatmap?skill=NAME
pub async fn handle_person_heatmap(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SkillQuery>,
) -> Result<Json<SkillSnapshot>, AppError> {
    if query.skill.as_deref().is_some_and(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }

    let candidate = find_candidate(&state, &id).await?;
    let skill = match query.skill {
        Some(skill) => skill,
        None => {
            let roster = state.source.list_candidates().await?;
            discover_skills(&roster)
                .into_iter()
                .next()
                .ok_or_else(|| AppError::Validation("No skills available to display".to_string()))?
        }
    };

    let snapshot = skill_snapshot(&candidate, &skill, &state.palette);
    debug!(
        "Level for {} / {skill}: {}",
        candidate.name,
        snapshot.level.value()
    );
    Ok(Json(snapshot))
}

/// GET /api/v1/people/:id/scores
pub async fn handle_person_scores(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreSheetResponse>, AppError> {
    let candidate = find_candidate(&state, &id).await?;
    Ok(Json(ScoreSheetResponse {
        scores: score_sheet(&candidate),
        candidate_id: candidate.id,
    }))
}

/// POST /api/v1/compare
///
/// Whole-roster comparison when no ids are given, shortlist otherwise.
/// Unknown ids in a shortlist are skipped.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonGrid>, AppError> {
    let candidates = if request.candidate_ids.is_empty() {
        state.source.list_candidates().await?
    } else {
        load_shortlist(&state, &request.candidate_ids).await?
    };

    let grid = comparison_grid(&candidates, &request.skills, &state.palette);
    info!(
        "Comparison grid: {} candidates, {} skill groups",
        grid.columns.len(),
        grid.groups.len()
    );
    Ok(Json(grid))
}

/// Fetches every id concurrently; the result keeps request order and drops
/// unknown ids.
async fn load_shortlist(state: &AppState, ids: &[String]) -> Result<Vec<Candidate>, AppError> {
    let mut tasks = JoinSet::new();
    for (index, id) in ids.iter().cloned().enumerate() {
        let source = Arc::clone(&state.source);
        tasks.spawn(async move {
            let result = source.candidate_details(&id).await;
            (index, id, result)
        });
    }

    let mut slots: Vec<Option<Candidate>> = vec![None; ids.len()];
    while let Some(joined) = tasks.join_next().await {
        let (index, id, result) = joined.map_err(|e| AppError::Internal(e.into()))?;
        match result? {
            Some(candidate) => slots[index] = Some(candidate),
            None => debug!("Skipping unknown candidate {id} in comparison"),
        }
    }

    Ok(slots.into_iter().flatten().collect())
}

async fn find_candidate(state: &AppState, id: &str) -> Result<Candidate, AppError> {
    state
        .source
        .candidate_details(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}
