use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::ActiveSession;
use crate::errors::AppError;
use crate::feedback::aggregate::{present, FeedbackView};
use crate::listing::loader::fetch_resume;
use crate::state::AppState;

/// GET /api/v1/resumes/:id/feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    _session: ActiveSession,
    Path(id): Path<String>,
) -> Result<Json<FeedbackView>, AppError> {
    let resume = fetch_resume(state.kv.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(present(&resume)))
}
