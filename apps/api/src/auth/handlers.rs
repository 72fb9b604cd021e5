use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::store::users::{Credentials, Registration};

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<Registration>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.db.register(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.db.login(&creds).await?))
}
