use std::path::Path;

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobPost;
use crate::models::message::{Message, SavedCandidate};
use crate::models::profile::Profile;
use crate::models::user::{User, UserRole};

/// Startup snapshot of the mock database. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFile {
    pub users: Option<Vec<User>>,
    pub profiles: Option<Vec<Profile>>,
    pub messages: Option<Vec<Message>>,
    pub saved_candidates: Option<Vec<SavedCandidate>>,
    pub job_posts: Option<Vec<JobPost>>,
}

/// The two demo accounts present in a fresh store.
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            email: "seeker@procv.com".to_string(),
            full_name: "John Seeker".to_string(),
            role: UserRole::JobSeeker,
            password: Some("password".to_string()),
            avatar: None,
        },
        User {
            id: "u2".to_string(),
            email: "employer@procv.com".to_string(),
            full_name: "Elite Recruiting".to_string(),
            role: UserRole::Employer,
            password: Some("password".to_string()),
            avatar: None,
        },
    ]
}

pub fn parse_seed(raw: &str) -> Result<SeedFile, AppError> {
    serde_json::from_str(raw).map_err(|e| AppError::Seed(format!("invalid seed JSON: {e}")))
}

pub async fn read_seed_file(path: &Path) -> Result<SeedFile, AppError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Seed(format!("cannot read {}: {e}", path.display())))?;
    parse_seed(&raw)
}
