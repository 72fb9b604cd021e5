use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    JobSeeker,
    Employer,
    Admin,
}

/// A marketplace member.
///
/// The password is kept in plaintext and compared verbatim on login. It is
/// accepted when deserializing seed data but never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn is_employer(&self) -> bool {
        self.role == UserRole::Employer
    }

    pub fn is_seeker(&self) -> bool {
        self.role == UserRole::JobSeeker
    }
}
