use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobPost;
use crate::models::profile::Profile;
use crate::search::{search_jobs, search_profiles, SearchPage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TalentSearchQuery {
    #[serde(default)]
    pub q: String,
    /// Exact country name; empty means all countries.
    pub country: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// GET /api/v1/search/talent
/// Public profiles only, whoever is asking.
pub async fn handle_search_talent(
    State(state): State<AppState>,
    Query(params): Query<TalentSearchQuery>,
) -> Result<Json<SearchPage<Profile>>, AppError> {
    let country = params.country.as_deref().filter(|c| !c.trim().is_empty());
    let profiles = state.db.public_profiles(country).await;
    Ok(Json(search_profiles(&params.q, &profiles, params.limit)))
}

/// GET /api/v1/search/jobs
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> Result<Json<SearchPage<JobPost>>, AppError> {
    let jobs = state.db.active_jobs().await;
    Ok(Json(search_jobs(&params.q, &jobs, params.limit)))
}
