//! Record clean-up applied at the store boundary, so everything downstream
//! (ranking included) can rely on trimmed, de-duplicated lists.

use crate::models::job::JobPost;
use crate::models::profile::Profile;

/// Trims each item, drops empties and exact duplicates, keeps first occurrence.
pub fn list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}

/// Blank optional text becomes absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn profile(mut profile: Profile) -> Profile {
    profile.skills = list(profile.skills);
    profile.languages = list(profile.languages);
    profile.city = optional(profile.city);
    profile.state = optional(profile.state);
    profile.country = optional(profile.country);
    profile.photo_url = optional(profile.photo_url);
    profile
}

pub fn job_post(mut job: JobPost) -> JobPost {
    job.requirements = list(job.requirements);
    job.benefits = list(job.benefits);
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_list_trims_and_dedups_in_order() {
        assert_eq!(
            list(strings(&[" Rust", "Go", "", "Rust ", "  ", "SQL"])),
            strings(&["Rust", "Go", "SQL"])
        );
    }

    #[test]
    fn test_list_is_case_sensitive() {
        assert_eq!(list(strings(&["Go", "go"])), strings(&["Go", "go"]));
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional(Some("  ".to_string())), None);
        assert_eq!(optional(None), None);
        assert_eq!(
            optional(Some("Toronto".to_string())),
            Some("Toronto".to_string())
        );
    }

    #[test]
    fn test_job_post_requirements_cleaned() {
        let job = job_post(JobPost {
            requirements: strings(&["Rust", "Rust", " "]),
            benefits: strings(&["Dental ", "Dental"]),
            ..JobPost::default()
        });
        assert_eq!(job.requirements, strings(&["Rust"]));
        assert_eq!(job.benefits, strings(&["Dental"]));
    }
}
