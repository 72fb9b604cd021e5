use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::messaging::threads::ThreadSummary;
use crate::models::message::Message;
use crate::routes::params::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub receiver_id: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct UnreadResponse {
    pub unread: usize,
}

/// GET /api/v1/messages/threads
pub async fn handle_list_threads(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ThreadSummary>>, AppError> {
    Ok(Json(state.db.threads(&params.user_id).await?))
}

/// GET /api/v1/messages/threads/:other_id
/// Opening a thread marks the other participant's messages as read.
pub async fn handle_open_thread(
    State(state): State<AppState>,
    Path(other_id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Message>>, AppError> {
    Ok(Json(state.db.open_thread(&params.user_id, &other_id).await?))
}

/// POST /api/v1/messages
pub async fn handle_send_message(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state
        .db
        .send_message(&params.user_id, &req.receiver_id, &req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/messages/unread
pub async fn handle_unread_count(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UnreadResponse>, AppError> {
    let unread = state.db.unread_count(&params.user_id).await?;
    Ok(Json(UnreadResponse { unread }))
}
