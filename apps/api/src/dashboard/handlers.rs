use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::JobPost;
use crate::models::profile::Profile;
use crate::search::{search_profiles, SearchPage};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekerDashboard {
    pub profiles: Vec<Profile>,
    pub unread_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerDashboard {
    pub search: SearchPage<Profile>,
    pub saved: Vec<Profile>,
    pub jobs: Vec<JobPost>,
    pub unread_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct EmployerDashboardQuery {
    pub user_id: String,
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SeekerDashboardQuery {
    pub user_id: String,
}

/// GET /api/v1/dashboard/seeker
pub async fn handle_seeker_dashboard(
    State(state): State<AppState>,
    Query(params): Query<SeekerDashboardQuery>,
) -> Result<Json<SeekerDashboard>, AppError> {
    let user = state.db.user(&params.user_id).await?;
    if !user.is_seeker() {
        return Err(AppError::Forbidden(
            "The seeker dashboard is for job seekers".to_string(),
        ));
    }

    Ok(Json(SeekerDashboard {
        profiles: state.db.profiles_owned_by(&user.id).await,
        unread_count: state.db.unread_count(&user.id).await?,
    }))
}

/// GET /api/v1/dashboard/employer
/// Talent search here covers every profile the employer may see, not just
/// public ones.
pub async fn handle_employer_dashboard(
    State(state): State<AppState>,
    Query(params): Query<EmployerDashboardQuery>,
) -> Result<Json<EmployerDashboard>, AppError> {
    let user = state.db.user(&params.user_id).await?;
    if !user.is_employer() {
        return Err(AppError::Forbidden(
            "The employer dashboard is for employers".to_string(),
        ));
    }

    let visible = state.db.visible_profiles(Some(&user)).await;
    Ok(Json(EmployerDashboard {
        search: search_profiles(&params.q, &visible, params.limit),
        saved: state.db.saved_profiles(&user.id).await?,
        jobs: state.db.jobs_owned_by(&user.id).await,
        unread_count: state.db.unread_count(&user.id).await?,
    }))
}
