use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{User, UserRole};
use crate::store::{new_id, MockDb};

/// Shown for message participants whose account no longer exists.
pub const UNKNOWN_MEMBER: &str = "Member";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl MockDb {
    /// Creates an account. Emails are unique; admins cannot self-register.
    pub async fn register(&self, reg: Registration) -> Result<User, AppError> {
        let full_name = reg.full_name.trim();
        let email = reg.email.trim();
        if full_name.is_empty() || email.is_empty() || reg.password.is_empty() {
            return Err(AppError::Validation(
                "Full name, email and password are required".to_string(),
            ));
        }
        if reg.role == UserRole::Admin {
            return Err(AppError::Validation(
                "Admin accounts cannot be self-registered".to_string(),
            ));
        }

        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::Conflict("Identity already registered.".to_string()));
        }

        let user = User {
            id: new_id(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role: reg.role,
            password: Some(reg.password),
            avatar: None,
        };
        tables.users.push(user.clone());

        info!("Registered user {} ({:?})", user.id, user.role);
        Ok(user)
    }

    /// Plaintext credential check.
    pub async fn login(&self, creds: &Credentials) -> Result<User, AppError> {
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|u| {
                u.email == creds.email.trim() && u.password.as_deref() == Some(creds.password.as_str())
            })
            .cloned()
            .ok_or(AppError::Unauthorized)
    }

    pub async fn user(&self, id: &str) -> Result<User, AppError> {
        self.tables.read().await.require_user(id)
    }

    /// Resolves an optional viewer id. An id that names no account is rejected
    /// rather than silently downgraded to anonymous.
    pub async fn viewer(&self, id: Option<&str>) -> Result<Option<User>, AppError> {
        match id {
            Some(id) => self.user(id).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn display_name(&self, id: &str) -> String {
        self.tables
            .read()
            .await
            .user(id)
            .map(|u| u.full_name.clone())
            .unwrap_or_else(|| UNKNOWN_MEMBER.to_string())
    }
}
