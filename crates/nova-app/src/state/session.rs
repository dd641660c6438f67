//! # Session State
//!
//! Holds the currently signed-in user, if any. A session starts signed out;
//! `login` fills the slot, `logout` clears it. Roles are checked against
//! this slot by the back-office commands.

use std::sync::{Arc, Mutex};

use nova_core::User;

/// Session-owned sign-in state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    user: Arc<Mutex<Option<User>>>,
}

impl SessionState {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Records a successful sign-in.
    pub fn sign_in(&self, user: User) {
        let mut slot = self.user.lock().expect("Session mutex poisoned");
        *slot = Some(user);
    }

    /// Clears the session. Safe to call when already signed out.
    pub fn sign_out(&self) {
        let mut slot = self.user.lock().expect("Session mutex poisoned");
        *slot = None;
    }

    /// Snapshot of the signed-in user, if any.
    pub fn current(&self) -> Option<User> {
        let slot = self.user.lock().expect("Session mutex poisoned");
        slot.clone()
    }

    /// Checks whether the signed-in user may use the back-office.
    pub fn is_admin(&self) -> bool {
        self.current().map(|u| u.is_admin()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nova_core::UserRole;

    fn user(role: UserRole) -> User {
        User {
            id: "u-1".to_string(),
            name: "Avery".to_string(),
            email: "avery@novagadgets.test".to_string(),
            password: "admin123".to_string(),
            role,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = SessionState::new();
        assert!(session.current().is_none());
        assert!(!session.is_admin());

        session.sign_in(user(UserRole::Admin));
        assert!(session.is_admin());
        assert_eq!(session.current().unwrap().id, "u-1");

        session.sign_out();
        assert!(session.current().is_none());
    }

    #[test]
    fn test_customer_is_not_admin() {
        let session = SessionState::new();
        session.sign_in(user(UserRole::Customer));
        assert!(!session.is_admin());
    }
}
