use serde::{Deserialize, Serialize};

/// A direct message. `timestamp` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub timestamp: i64,
    #[serde(default)]
    pub read: bool,
}

/// An employer's bookmark on a candidate profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCandidate {
    pub id: String,
    pub employer_id: String,
    #[serde(rename = "cvId")]
    pub profile_id: String,
    pub timestamp: i64,
}
