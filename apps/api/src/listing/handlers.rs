use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::auth::ActiveSession;
use crate::errors::AppError;
use crate::feedback::models::Resume;
use crate::listing::loader::fetch_resume;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub count: usize,
    pub resumes: Vec<Resume>,
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    _session: ActiveSession,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state
        .listing
        .refresh(state.kv.as_ref(), state.config.store_timeout)
        .await?;
    Ok(Json(ResumeListResponse {
        count: resumes.len(),
        resumes,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let resume = fetch_resume(state.kv.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(resume))
}
