use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[default]
    Private,
    EmployersOnly,
    Public,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CvTemplate {
    #[default]
    Modern,
    Canadian,
    Minimalist,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
}

pub const DEFAULT_PROFILE_THEME: &str = "#1d70b8";

/// A job seeker's CV. `location` is the legacy free-text location that
/// predates the split city/state/country fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub summary: String,
    pub job_title: String,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub courses: Vec<Course>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub references: Vec<Reference>,
    pub visibility: Visibility,
    pub updated_at: i64,
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub template: CvTemplate,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: String::new(),
            user_id: String::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            city: None,
            state: None,
            country: None,
            summary: String::new(),
            job_title: String::new(),
            experiences: vec![],
            educations: vec![],
            courses: vec![],
            languages: vec![],
            skills: vec![],
            references: vec![],
            visibility: Visibility::Private,
            updated_at: 0,
            theme_color: DEFAULT_PROFILE_THEME.to_string(),
            photo_url: None,
            template: CvTemplate::Modern,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_wire_names() {
        let v: Visibility = serde_json::from_str(r#""EMPLOYERS_ONLY""#).unwrap();
        assert_eq!(v, Visibility::EmployersOnly);
        assert_eq!(
            serde_json::to_string(&Visibility::Public).unwrap(),
            r#""PUBLIC""#
        );
    }

    #[test]
    fn test_sparse_profile_fills_defaults() {
        let json = r#"{
            "id": "cv1",
            "userId": "u1",
            "fullName": "John Seeker",
            "jobTitle": "Frontend Engineer",
            "skills": ["React"],
            "visibility": "PUBLIC"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.job_title, "Frontend Engineer");
        assert!(profile.city.is_none());
        assert!(profile.courses.is_empty());
        assert_eq!(profile.template, CvTemplate::Modern);
        assert_eq!(profile.theme_color, DEFAULT_PROFILE_THEME);
    }

    #[test]
    fn test_absent_city_is_omitted_on_output() {
        let profile = Profile {
            id: "cv1".to_string(),
            ..Profile::default()
        };
        let out = serde_json::to_value(&profile).unwrap();
        assert!(out.get("city").is_none());
        assert_eq!(out["visibility"], "PRIVATE");
    }
}
