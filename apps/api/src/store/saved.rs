use tracing::info;

use crate::errors::AppError;
use crate::models::message::SavedCandidate;
use crate::models::profile::Profile;
use crate::store::visibility::can_view_profile;
use crate::store::{new_id, now_millis, MockDb};

impl MockDb {
    /// Bookmarks or un-bookmarks a candidate. Returns the new saved state.
    pub async fn toggle_saved(&self, employer_id: &str, profile_id: &str) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let employer = tables.require_user(employer_id)?;
        if !employer.is_employer() {
            return Err(AppError::Forbidden(
                "Only employers can save candidates.".to_string(),
            ));
        }

        let profile = tables
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| AppError::NotFound(format!("Profile {profile_id} not found")))?;
        if !can_view_profile(profile, Some(&employer)) {
            return Err(AppError::Forbidden(
                "This profile is not visible to you".to_string(),
            ));
        }

        let existing = tables
            .saved
            .iter()
            .position(|s| s.employer_id == employer.id && s.profile_id == profile_id);
        let saved = match existing {
            Some(idx) => {
                tables.saved.remove(idx);
                false
            }
            None => {
                tables.saved.push(SavedCandidate {
                    id: new_id(),
                    employer_id: employer.id.clone(),
                    profile_id: profile_id.to_string(),
                    timestamp: now_millis(),
                });
                true
            }
        };

        info!("Employer {} saved={saved} profile {profile_id}", employer.id);
        Ok(saved)
    }

    pub async fn is_saved(&self, employer_id: &str, profile_id: &str) -> bool {
        self.tables
            .read()
            .await
            .saved
            .iter()
            .any(|s| s.employer_id == employer_id && s.profile_id == profile_id)
    }

    /// Bookmarked profiles that still exist, in bookmark order.
    pub async fn saved_profiles(&self, employer_id: &str) -> Result<Vec<Profile>, AppError> {
        let tables = self.tables.read().await;
        let employer = tables.require_user(employer_id)?;
        Ok(tables
            .saved
            .iter()
            .filter(|s| s.employer_id == employer.id)
            .filter_map(|s| tables.profiles.iter().find(|p| p.id == s.profile_id))
            .cloned()
            .collect())
    }
}
