use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{Profile, Visibility};
use crate::models::user::User;
use crate::store::visibility::can_view_profile;
use crate::store::{new_id, normalize, now_millis, MockDb};

impl MockDb {
    /// Creates or replaces a profile owned by `owner_id`.
    ///
    /// Only job seekers keep profiles. An empty id creates a new record; an
    /// existing id must belong to the caller. The owner and `updatedAt` are
    /// always set server-side.
    pub async fn upsert_profile(
        &self,
        owner_id: &str,
        profile: Profile,
    ) -> Result<Profile, AppError> {
        let mut tables = self.tables.write().await;
        let owner = tables.require_user(owner_id)?;
        if !owner.is_seeker() {
            return Err(AppError::Forbidden(
                "Only job seekers can save CV profiles.".to_string(),
            ));
        }

        let mut profile = normalize::profile(profile);
        if profile.id.trim().is_empty() {
            profile.id = new_id();
        }
        profile.user_id = owner.id.clone();
        profile.updated_at = now_millis();

        match tables.profiles.iter().position(|p| p.id == profile.id) {
            Some(idx) => {
                if tables.profiles[idx].user_id != owner.id {
                    return Err(AppError::Forbidden(format!(
                        "Profile {} belongs to another member",
                        profile.id
                    )));
                }
                tables.profiles[idx] = profile.clone();
                info!("Updated profile {} for user {}", profile.id, owner.id);
            }
            None => {
                tables.profiles.push(profile.clone());
                info!("Created profile {} for user {}", profile.id, owner.id);
            }
        }

        Ok(profile)
    }

    pub async fn profile(&self, id: &str) -> Result<Profile, AppError> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))
    }

    /// Fetches a profile on behalf of `viewer`, enforcing visibility.
    pub async fn view_profile(&self, id: &str, viewer: Option<&User>) -> Result<Profile, AppError> {
        let profile = self.profile(id).await?;
        if !can_view_profile(&profile, viewer) {
            return Err(AppError::Forbidden(
                "This profile is not visible to you".to_string(),
            ));
        }
        Ok(profile)
    }

    pub async fn profiles_owned_by(&self, user_id: &str) -> Vec<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Every profile `viewer` is allowed to see, in store order.
    pub async fn visible_profiles(&self, viewer: Option<&User>) -> Vec<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .filter(|p| can_view_profile(p, viewer))
            .cloned()
            .collect()
    }

    /// Public profiles, optionally restricted to an exact country.
    pub async fn public_profiles(&self, country: Option<&str>) -> Vec<Profile> {
        self.tables
            .read()
            .await
            .profiles
            .iter()
            .filter(|p| p.visibility == Visibility::Public)
            .filter(|p| country.map_or(true, |c| p.country.as_deref() == Some(c)))
            .cloned()
            .collect()
    }

    /// Deletes a profile and every bookmark pointing at it.
    pub async fn delete_profile(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let owner = tables.require_user(owner_id)?;
        let idx = tables
            .profiles
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
        if tables.profiles[idx].user_id != owner.id {
            return Err(AppError::Forbidden(format!(
                "Profile {id} belongs to another member"
            )));
        }

        tables.profiles.remove(idx);
        tables.saved.retain(|s| s.profile_id != id);
        info!("Deleted profile {id} for user {}", owner.id);
        Ok(())
    }
}
