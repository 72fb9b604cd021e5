// Talent market and job board search.
// Visibility filtering happens in the store; ranking lives in `ranking`.

pub mod handlers;
pub mod ranking;

use serde::Serialize;
use tracing::debug;

use crate::models::job::JobPost;
use crate::models::profile::Profile;
use crate::search::ranking::{parse_query, score_job_posts, score_profiles, Scored, SearchMode};

/// A ranked result list. `total` counts matches before `limit` was applied.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<T> {
    pub total: usize,
    pub results: Vec<Scored<T>>,
}

impl<T: Clone> SearchPage<T> {
    fn from_ranked(ranked: Vec<Scored<&T>>, limit: Option<usize>) -> Self {
        let total = ranked.len();
        let results = ranked
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(Scored::cloned)
            .collect();
        Self { total, results }
    }
}

fn token_count(query: &str) -> usize {
    match parse_query(query) {
        SearchMode::Browse => 0,
        SearchMode::Keywords(tokens) => tokens.len(),
    }
}

/// Ranks already visibility-filtered profiles.
pub fn search_profiles(query: &str, profiles: &[Profile], limit: Option<usize>) -> SearchPage<Profile> {
    let page = SearchPage::from_ranked(score_profiles(query, profiles), limit);
    debug!(
        "Profile search: {} tokens, {} of {} candidates matched",
        token_count(query),
        page.total,
        profiles.len()
    );
    page
}

/// Ranks job posts the caller has already restricted to what should be listed.
pub fn search_jobs(query: &str, jobs: &[JobPost], limit: Option<usize>) -> SearchPage<JobPost> {
    let page = SearchPage::from_ranked(score_job_posts(query, jobs), limit);
    debug!(
        "Job search: {} tokens, {} of {} posts matched",
        token_count(query),
        page.total,
        jobs.len()
    );
    page
}
