//! # User Repository
//!
//! The account table and the hardcoded-credential sign-in check.
//!
//! Credentials are plain strings compared byte-for-byte: the table is demo
//! fixture data and authentication *security* is explicitly out of scope for
//! this system. What is in scope is the shape of the flow - unknown email
//! and wrong password collapse into one error so the UI cannot leak which
//! half was wrong, and disabled accounts are told apart from bad credentials.

use chrono::Utc;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use nova_core::validation::validate_email;
use nova_core::{CoreError, User};

/// Repository for account data.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        UserRepository::default()
    }

    /// Creates a repository over pre-seeded users.
    pub fn with_users(users: Vec<User>) -> Self {
        UserRepository { users }
    }

    /// Lists all accounts (back-office user table).
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Gets an account by its ID.
    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Gets an account by email (case-insensitive).
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        let needle = email.trim().to_lowercase();
        self.users
            .iter()
            .find(|u| u.email.to_lowercase() == needle)
            .cloned()
    }

    /// Checks a credential pair against the table.
    ///
    /// ## Returns
    /// * `Ok(User)` - credentials match an active account
    /// * `Err(InvalidCredentials)` - unknown email OR wrong password
    /// * `Err(AccountDisabled)` - credentials match a deactivated account
    pub fn authenticate(&self, email: &str, password: &str) -> CatalogResult<User> {
        debug!(email = %email, "Authenticating");

        let user = self
            .get_by_email(email)
            .ok_or(CatalogError::InvalidCredentials)?;

        if user.password != password {
            return Err(CatalogError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(CatalogError::AccountDisabled);
        }

        Ok(user)
    }

    /// Inserts a new account.
    ///
    /// ## Returns
    /// * `Err(CatalogError::Duplicate)` - email already registered
    /// * `Err(CatalogError::Core)` - malformed email
    pub fn insert(&mut self, user: User) -> CatalogResult<User> {
        debug!(email = %user.email, "Inserting user");

        validate_email(&user.email).map_err(CoreError::from)?;

        if self.get_by_email(&user.email).is_some() {
            return Err(CatalogError::duplicate("email", &user.email));
        }

        self.users.push(user.clone());
        Ok(user)
    }

    /// Enables or disables an account (soft delete).
    pub fn set_active(&mut self, id: &str, active: bool) -> CatalogResult<()> {
        debug!(id = %id, active = %active, "Setting user active flag");

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| CatalogError::not_found("User", id))?;

        user.is_active = active;
        Ok(())
    }

    /// Counts all accounts.
    pub fn count(&self) -> usize {
        self.users.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nova_core::UserRole;

    fn test_user(id: &str, email: &str, password: &str, role: UserRole) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: email.to_string(),
            password: password.to_string(),
            role,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    fn seeded() -> UserRepository {
        UserRepository::with_users(vec![
            test_user("u-1", "avery@novagadgets.test", "admin123", UserRole::Admin),
            test_user("u-2", "dana@example.test", "dana123", UserRole::Customer),
        ])
    }

    #[test]
    fn test_authenticate_success() {
        let repo = seeded();
        let user = repo
            .authenticate("avery@novagadgets.test", "admin123")
            .unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn test_authenticate_is_case_insensitive_on_email() {
        let repo = seeded();
        assert!(repo
            .authenticate("AVERY@NOVAGADGETS.TEST", "admin123")
            .is_ok());
    }

    #[test]
    fn test_authenticate_rejects_bad_credentials_uniformly() {
        let repo = seeded();

        let unknown = repo.authenticate("ghost@example.test", "whatever");
        let wrong_pw = repo.authenticate("dana@example.test", "wrong");

        // Same error either way - the UI cannot tell which half failed
        assert!(matches!(unknown, Err(CatalogError::InvalidCredentials)));
        assert!(matches!(wrong_pw, Err(CatalogError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_rejects_disabled_accounts() {
        let mut repo = seeded();
        repo.set_active("u-2", false).unwrap();

        let err = repo.authenticate("dana@example.test", "dana123").unwrap_err();
        assert!(matches!(err, CatalogError::AccountDisabled));
    }

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let mut repo = seeded();
        let err = repo
            .insert(test_user(
                "u-3",
                "Dana@Example.Test",
                "x",
                UserRole::Customer,
            ))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { .. }));
    }

    #[test]
    fn test_insert_rejects_malformed_email() {
        let mut repo = UserRepository::new();
        let err = repo
            .insert(test_user("u-1", "not-an-email", "x", UserRole::Customer))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Core(_)));
    }

    #[test]
    fn test_set_active_unknown_user() {
        let mut repo = seeded();
        assert!(matches!(
            repo.set_active("u-404", false),
            Err(CatalogError::NotFound { .. })
        ));
    }
}
