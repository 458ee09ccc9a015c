//! Session context
//!
//! An explicit value holding the currently authenticated user. Callers own
//! their session and pass it to every operation requiring authorization;
//! there is no global state.

use crate::user::{Role, User};

/// Current-user context for one caller
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    /// Creates a session with no authenticated user
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a session already holding an authenticated user
    pub fn authenticated(user: User) -> Self {
        Self { current: Some(user) }
    }

    /// Replaces the current user after a successful login
    pub fn set(&mut self, user: User) {
        self.current = Some(user);
    }

    /// Clears the session on logout
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Returns the authenticated user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Role of the authenticated user, if any
    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use core_kernel::UserId;

    fn test_user(role: Role) -> User {
        User {
            id: UserId::new(1),
            email: "someone@university.ac.za".to_string(),
            full_name: "Someone".to_string(),
            role,
            active: true,
            created_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.role().is_none());

        session.set(test_user(Role::Lecturer));
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Lecturer));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_two_independent_sessions() {
        let lecturer = Session::authenticated(test_user(Role::Lecturer));
        let manager = Session::authenticated(test_user(Role::Manager));

        assert_eq!(lecturer.role(), Some(Role::Lecturer));
        assert_eq!(manager.role(), Some(Role::Manager));
    }
}
