use crate::models::profile::{Profile, Visibility};
use crate::models::user::{User, UserRole};

/// Whether `viewer` may see `profile`. `None` is an anonymous visitor.
///
/// Public profiles are visible to everyone; the owner and admins always see a
/// profile; employer-only profiles are additionally visible to employers.
pub fn can_view_profile(profile: &Profile, viewer: Option<&User>) -> bool {
    if profile.visibility == Visibility::Public {
        return true;
    }
    let Some(viewer) = viewer else {
        return false;
    };
    if profile.user_id == viewer.id {
        return true;
    }
    match viewer.role {
        UserRole::Admin => true,
        UserRole::Employer => profile.visibility == Visibility::EmployersOnly,
        UserRole::JobSeeker => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{profile, user};

    #[test]
    fn test_public_visible_to_anonymous() {
        let p = profile("cv1", "u1", Visibility::Public);
        assert!(can_view_profile(&p, None));
    }

    #[test]
    fn test_private_hidden_from_anonymous_and_others() {
        let p = profile("cv1", "u1", Visibility::Private);
        let employer = user("u2", "Elite Recruiting", UserRole::Employer);
        let seeker = user("u3", "Amy Lee", UserRole::JobSeeker);
        assert!(!can_view_profile(&p, None));
        assert!(!can_view_profile(&p, Some(&employer)));
        assert!(!can_view_profile(&p, Some(&seeker)));
    }

    #[test]
    fn test_owner_always_sees_own_profile() {
        let p = profile("cv1", "u1", Visibility::Private);
        let owner = user("u1", "John Seeker", UserRole::JobSeeker);
        assert!(can_view_profile(&p, Some(&owner)));
    }

    #[test]
    fn test_employers_only() {
        let p = profile("cv1", "u1", Visibility::EmployersOnly);
        let employer = user("u2", "Elite Recruiting", UserRole::Employer);
        let seeker = user("u3", "Amy Lee", UserRole::JobSeeker);
        assert!(can_view_profile(&p, Some(&employer)));
        assert!(!can_view_profile(&p, Some(&seeker)));
        assert!(!can_view_profile(&p, None));
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = user("a1", "Root", UserRole::Admin);
        for v in [
            Visibility::Private,
            Visibility::EmployersOnly,
            Visibility::Public,
        ] {
            assert!(can_view_profile(&profile("cv1", "u1", v), Some(&admin)));
        }
    }
}
