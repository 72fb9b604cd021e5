use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::message::Message;
use crate::models::profile::Profile;
use crate::routes::params::{MessageBody, UserIdQuery, ViewerQuery};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub profile: Profile,
    /// Whether the viewing employer has bookmarked this profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<bool>,
}

#[derive(Serialize)]
pub struct SavedState {
    pub saved: bool,
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ViewerQuery>,
) -> Result<Json<ProfileView>, AppError> {
    let viewer = state.db.viewer(params.viewer_id.as_deref()).await?;
    let profile = state.db.view_profile(&id, viewer.as_ref()).await?;

    let saved = match &viewer {
        Some(v) if v.is_employer() => Some(state.db.is_saved(&v.id, &id).await),
        _ => None,
    };
    Ok(Json(ProfileView { profile, saved }))
}

/// PUT /api/v1/profiles
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    let saved = state.db.upsert_profile(&params.user_id, profile).await?;
    Ok(Json(saved))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.db.delete_profile(&params.user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/profiles/:id/contact
pub async fn handle_contact_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
    Json(body): Json<MessageBody>,
) -> Result<(StatusCode, Json<Message>), AppError> {
    let message = state
        .db
        .contact_candidate(&params.user_id, &id, &body.content)
        .await?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// POST /api/v1/profiles/:id/save
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedState>, AppError> {
    let saved = state.db.toggle_saved(&params.user_id, &id).await?;
    Ok(Json(SavedState { saved }))
}
