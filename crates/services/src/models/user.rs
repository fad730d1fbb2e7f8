//! User record and session context.

use serde::{Deserialize, Serialize};

use bamboo_box_core::{Email, SessionToken, UserId, UserRole, Username};

/// A registered account.
///
/// `username` and `email` are unique across all users (enforced by the
/// identity service at registration). The role is fixed for the account's
/// lifetime. Users are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub role: UserRole,
    /// Opaque token reissued at every login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<SessionToken>,
    /// Argon2 hash of the account password. Absent on records created
    /// before credential checks existed (seed users); such accounts accept
    /// any password at login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// The authenticated actor for a sequence of service calls.
///
/// Replaces the old implicit "current user" global: callers obtain a
/// `Session` from the identity service and hand it to whatever needs an
/// actor. The persisted current-session slot holds the same `User` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    pub user: User,
}

impl Session {
    /// Create a session for `user`.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    /// ID of the authenticated user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user.id
    }

    /// Role of the authenticated user.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.user.role
    }
}
