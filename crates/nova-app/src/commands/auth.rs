//! # Auth Commands
//!
//! Sign-in against the seeded credential table. There is no registration,
//! no token, no hashing - the session slot IS the authentication state,
//! and it dies with the session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState};
use nova_core::{User, UserRole};

// =============================================================================
// User DTO
// =============================================================================

/// Account DTO for the shell. The password never crosses this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub joined_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        UserDto {
            id: u.id,
            name: u.name,
            email: u.email,
            role: u.role,
            is_active: u.is_active,
            joined_at: u.joined_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Signs in with an email/password pair.
///
/// ## Errors
/// - `UNAUTHORIZED` - unknown email or wrong password (indistinguishable)
/// - `FORBIDDEN` - the account was deactivated by an administrator
pub fn login(
    catalog: &CatalogState,
    session: &SessionState,
    email: &str,
    password: &str,
) -> Result<UserDto, ApiError> {
    debug!(email = %email, "login command");

    let user = catalog.with_catalog(|c| c.users().authenticate(email, password))?;

    info!(user_id = %user.id, role = ?user.role, "Signed in");
    session.sign_in(user.clone());
    Ok(UserDto::from(user))
}

/// Signs out. Safe to call when already signed out. The cart and wishlist
/// are session state, not account state - they survive a sign-out.
pub fn logout(session: &SessionState) {
    debug!("logout command");
    session.sign_out();
}

/// The signed-in user, if any (header avatar, route guards).
pub fn current_user(session: &SessionState) -> Option<UserDto> {
    debug!("current_user command");
    session.current().map(UserDto::from)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nova_catalog::Catalog;

    fn states() -> (CatalogState, SessionState) {
        (CatalogState::new(Catalog::demo()), SessionState::new())
    }

    #[test]
    fn test_login_success_fills_session() {
        let (catalog, session) = states();

        let user = login(&catalog, &session, "avery@novagadgets.test", "admin123").unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(current_user(&session).unwrap().id, user.id);
    }

    #[test]
    fn test_login_never_exposes_password() {
        let (catalog, session) = states();
        let user = login(&catalog, &session, "dana@example.test", "dana123").unwrap();

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("dana123"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_login_wrong_password() {
        let (catalog, session) = states();
        let err = login(&catalog, &session, "dana@example.test", "nope").unwrap_err();

        assert_eq!(err.code, crate::error::ErrorCode::Unauthorized);
        assert!(current_user(&session).is_none());
    }

    #[test]
    fn test_login_disabled_account() {
        let (catalog, session) = states();
        let err = login(&catalog, &session, "riley@example.test", "riley123").unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Forbidden);
    }

    #[test]
    fn test_logout_clears_session() {
        let (catalog, session) = states();
        login(&catalog, &session, "sam@example.test", "sam123").unwrap();

        logout(&session);
        assert!(current_user(&session).is_none());

        // Idempotent
        logout(&session);
    }
}
