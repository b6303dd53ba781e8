use crate::models::User;

/// What a protected surface requires of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any signed-in account (reservations, profile).
    Authenticated,
    /// Staff accounts only (admin hotel/room management).
    Staff,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    /// Nobody is signed in. Send the caller to the login screen; a booking
    /// submission stops here and the request is never issued.
    DeniedUnauthenticated,
    /// Signed in without staff rights. Notify and send home.
    DeniedNotStaff,
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Classify a user against a policy.
///
/// Pure and synchronous; callers evaluate it on every guarded render and on
/// every booking submit rather than caching the result, so a logout
/// anywhere in the process takes effect on the next check.
pub fn check_access(user: Option<&User>, policy: AccessPolicy) -> Access {
    match (user, policy) {
        (None, _) => Access::DeniedUnauthenticated,
        (Some(user), AccessPolicy::Staff) if !user.is_staff => Access::DeniedNotStaff,
        _ => Access::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_staff: bool) -> User {
        User {
            id: 1,
            username: "guest".to_string(),
            email: "guest@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff,
        }
    }

    #[test]
    fn test_anonymous_is_denied_everywhere() {
        assert_eq!(
            check_access(None, AccessPolicy::Authenticated),
            Access::DeniedUnauthenticated
        );
        assert_eq!(
            check_access(None, AccessPolicy::Staff),
            Access::DeniedUnauthenticated
        );
    }

    #[test]
    fn test_regular_user_can_book_but_not_administer() {
        let regular = user(false);
        assert_eq!(
            check_access(Some(&regular), AccessPolicy::Authenticated),
            Access::Allowed
        );
        assert_eq!(
            check_access(Some(&regular), AccessPolicy::Staff),
            Access::DeniedNotStaff
        );
    }

    #[test]
    fn test_staff_is_allowed_everywhere() {
        let staff = user(true);
        assert_eq!(
            check_access(Some(&staff), AccessPolicy::Authenticated),
            Access::Allowed
        );
        assert_eq!(
            check_access(Some(&staff), AccessPolicy::Staff),
            Access::Allowed
        );
        assert!(check_access(Some(&staff), AccessPolicy::Staff).is_allowed());
    }
}
