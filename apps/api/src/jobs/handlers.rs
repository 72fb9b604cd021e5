use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::job::JobPost;
use crate::models::message::Message;
use crate::routes::params::{MessageBody, UserIdQuery};
use crate::state::AppState;

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPost>, AppError> {
    Ok(Json(state.db.job(&id).await?))
}

/// PUT /api/v1/jobs
pub async fn handle_upsert_job(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(job): Json<JobPost>,
) -> Result<Json<JobPost>, AppError> {
    Ok(Json(state.db.upsert_job(&params.user_id, job).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.db.delete_job(&params.user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(body): Json<MessageBody>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state
        .db
        .apply_to_job(&params.user_id, &id, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}
