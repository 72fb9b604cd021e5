use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobPostStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Remote,
}

pub const DEFAULT_JOB_THEME: &str = "#4f46e5";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPost {
    pub id: String,
    pub employer_id: String,
    pub company_name: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary_range: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub status: JobPostStatus,
    pub updated_at: i64,
    pub theme_color: String,
}

impl Default for JobPost {
    fn default() -> Self {
        Self {
            id: String::new(),
            employer_id: String::new(),
            company_name: String::new(),
            title: String::new(),
            location: String::new(),
            job_type: JobType::FullTime,
            salary_range: String::new(),
            description: String::new(),
            requirements: vec![],
            benefits: vec![],
            status: JobPostStatus::Active,
            updated_at: 0,
            theme_color: DEFAULT_JOB_THEME.to_string(),
        }
    }
}
