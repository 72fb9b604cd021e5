//! In-memory mock database. Holds every table of the marketplace behind a
//! single `RwLock`; nothing is written back to disk.

pub mod jobs;
pub mod messages;
pub mod normalize;
pub mod profiles;
pub mod saved;
pub mod seed;
pub mod users;
pub mod visibility;

use std::path::Path;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPost;
use crate::models::message::{Message, SavedCandidate};
use crate::models::profile::Profile;
use crate::models::user::User;
use crate::store::seed::{initial_users, SeedFile};

/// Length of generated record ids.
const ID_LEN: usize = 9;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    pub messages: Vec<Message>,
    pub saved: Vec<SavedCandidate>,
    pub jobs: Vec<JobPost>,
}

impl Tables {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolves the acting user. Unknown ids are treated as unauthenticated.
    pub fn require_user(&self, id: &str) -> Result<User, AppError> {
        self.user(id).cloned().ok_or(AppError::Unauthorized)
    }
}

#[derive(Debug)]
pub struct MockDb {
    pub(crate) tables: RwLock<Tables>,
}

impl MockDb {
    /// A store holding only the built-in demo users.
    pub fn new() -> Self {
        Self::from_seed(SeedFile::default())
    }

    /// Builds a store from seed data. Tables absent from the seed fall back to
    /// their built-in contents.
    pub fn from_seed(seed: SeedFile) -> Self {
        let tables = Tables {
            users: seed.users.unwrap_or_else(initial_users),
            profiles: seed
                .profiles
                .unwrap_or_default()
                .into_iter()
                .map(normalize::profile)
                .collect(),
            messages: seed.messages.unwrap_or_default(),
            saved: seed.saved_candidates.unwrap_or_default(),
            jobs: seed
                .job_posts
                .unwrap_or_default()
                .into_iter()
                .map(normalize::job_post)
                .collect(),
        };

        info!(
            "Mock database ready: {} users, {} profiles, {} jobs, {} messages",
            tables.users.len(),
            tables.profiles.len(),
            tables.jobs.len(),
            tables.messages.len()
        );

        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Loads the seed file at `path`, or the built-in state when `None`.
    pub async fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let seed = seed::read_seed_file(path).await?;
                info!("Loaded seed data from {}", path.display());
                Ok(Self::from_seed(seed))
            }
            None => Ok(Self::new()),
        }
    }
}

impl Default for MockDb {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a short lower-case alphanumeric record id.
pub(crate) fn new_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LEN].to_string()
}

/// Current time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::job::JobPost;
    use crate::models::profile::{Profile, Visibility};
    use crate::models::user::{User, UserRole};

    pub fn user(id: &str, name: &str, role: UserRole) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@procv.com"),
            full_name: name.to_string(),
            role,
            password: Some("password".to_string()),
            avatar: None,
        }
    }

    pub fn profile(id: &str, owner: &str, visibility: Visibility) -> Profile {
        Profile {
            id: id.to_string(),
            user_id: owner.to_string(),
            full_name: format!("Owner of {id}"),
            job_title: "Engineer".to_string(),
            visibility,
            ..Profile::default()
        }
    }

    pub fn job(id: &str, employer: &str, title: &str) -> JobPost {
        JobPost {
            id: id.to_string(),
            employer_id: employer.to_string(),
            company_name: "Elite Recruiting".to_string(),
            title: title.to_string(),
            location: "Toronto".to_string(),
            ..JobPost::default()
        }
    }
}
