//! Identity service.
//!
//! Registers and authenticates users against the users bucket and owns the
//! persisted current-session slot. Passwords are argon2-hashed at
//! registration; records without a hash (seed users) accept any password,
//! preserving the demo login flow.

mod error;

pub use error::IdentityError;

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use rand::Rng;

use bamboo_box_core::{Email, SessionToken, UserId, UserRole, Username};

use crate::latency::Latency;
use crate::models::{Session, User};
use crate::store::{Store, StoreExt, buckets};

/// Identity service.
///
/// All session reads and writes go through this handle; there is no global
/// current-user state anywhere else.
pub struct IdentityService {
    store: Arc<dyn Store>,
    latency: Latency,
}

impl IdentityService {
    /// Create an identity service over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Register a new account and mark it as the current session.
    ///
    /// The store is untouched when registration fails.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateUsername` / `DuplicateEmail` if either is taken,
    /// `InvalidEmail` / `InvalidUsername` on malformed input, and
    /// `PasswordHash` / `Store` on infrastructure failures.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
        username: &str,
    ) -> Result<Session, IdentityError> {
        Latency::pause(self.latency.auth).await;

        let email = Email::parse(email)?;
        let username = Username::parse(username)?;

        let mut users: Vec<User> = self.store.get_or(buckets::USERS, Vec::new())?;
        if users.iter().any(|u| u.username == username) {
            return Err(IdentityError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email == email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let user = User {
            id: UserId::generate(),
            username,
            email,
            role,
            token: Some(SessionToken::generate()),
            password_hash: Some(hash_password(password)?),
        };

        users.push(user.clone());
        self.store.put(buckets::USERS, &users)?;

        let session = Session::new(user);
        self.store.put(buckets::CURRENT_USER, &session)?;

        tracing::info!(user_id = %session.user_id(), role = %session.role(), "registered user");
        Ok(session)
    }

    /// Log in by username, reissue the session token, and mark the account
    /// as the current session.
    ///
    /// The stored record's role is authoritative; `role` is only what the
    /// login form claimed.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if the username is unknown and
    /// `InvalidCredentials` if the account has a password hash that does
    /// not match.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<Session, IdentityError> {
        Latency::pause(self.latency.auth).await;

        let username = Username::parse(username)?;
        let mut users: Vec<User> = self.store.get_or(buckets::USERS, Vec::new())?;

        let user = users
            .iter_mut()
            .find(|u| u.username == username)
            .ok_or(IdentityError::UserNotFound)?;

        if user.role != role {
            tracing::debug!(
                stored = %user.role,
                requested = %role,
                "login form role differs from stored role; stored wins"
            );
        }

        // Seed/legacy records carry no hash and accept any password.
        if let Some(hash) = &user.password_hash {
            verify_password(password, hash)?;
        }

        user.token = Some(SessionToken::generate());
        let session = Session::new(user.clone());

        self.store.put(buckets::USERS, &users)?;
        self.store.put(buckets::CURRENT_USER, &session)?;

        tracing::info!(user_id = %session.user_id(), "logged in");
        Ok(session)
    }

    /// Clear the current-session slot. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the slot cannot be cleared.
    pub fn logout(&self) -> Result<(), IdentityError> {
        self.store.remove(buckets::CURRENT_USER)?;
        Ok(())
    }

    /// The persisted current session, if anyone is logged in.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the slot cannot be read.
    pub fn current_user(&self) -> Result<Option<Session>, IdentityError> {
        Ok(self.store.get(buckets::CURRENT_USER)?)
    }

    /// Reset an account's password by email and reissue its token.
    ///
    /// Does not touch the current session. The verification code is
    /// accepted without checking (demonstration-grade).
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if no account has this email.
    pub async fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        code: &str,
    ) -> Result<(), IdentityError> {
        Latency::pause(self.latency.auth).await;

        let email = Email::parse(email)?;
        let mut users: Vec<User> = self.store.get_or(buckets::USERS, Vec::new())?;

        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(IdentityError::UserNotFound)?;

        tracing::warn!(code, "reset code accepted without verification");

        user.password_hash = Some(hash_password(new_password)?);
        user.token = Some(SessionToken::generate());
        self.store.put(buckets::USERS, &users)?;

        tracing::info!(%email, "password reset");
        Ok(())
    }

    /// Simulate sending a verification email and return the code.
    ///
    /// Nothing is actually sent and the code is not persisted; the reset
    /// flow accepts any code.
    pub async fn send_email_code(&self, email: &str) -> String {
        Latency::pause(self.latency.email).await;

        let code = rand::rng().random_range(1000..10000).to_string();
        tracing::info!(email, code, "simulated verification email");
        code
    }
}

fn hash_password(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| IdentityError::PasswordHash)
}

fn verify_password(password: &str, hash: &str) -> Result<(), IdentityError> {
    let parsed = PasswordHash::new(hash).map_err(|_| IdentityError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| IdentityError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> IdentityService {
        IdentityService::new(Arc::new(MemoryStore::new()), Latency::none())
    }

    #[tokio::test]
    async fn test_register_sets_current_session() {
        let svc = service();
        let session = svc
            .register("a@x.com", "hunter22", UserRole::User, "alice")
            .await
            .unwrap();

        let current = svc.current_user().unwrap().unwrap();
        assert_eq!(current.user_id(), session.user_id());
        assert!(current.user.token.is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_username_leaves_store_unchanged() {
        let svc = service();
        svc.register("a@x.com", "pw", UserRole::User, "alice")
            .await
            .unwrap();
        let before = svc.store.get_raw(buckets::USERS).unwrap();

        let err = svc
            .register("b@x.com", "pw", UserRole::User, "alice")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::DuplicateUsername));
        assert_eq!(svc.store.get_raw(buckets::USERS).unwrap(), before);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let svc = service();
        svc.register("a@x.com", "pw", UserRole::User, "alice")
            .await
            .unwrap();
        let err = svc
            .register("a@x.com", "pw", UserRole::Merchant, "bob")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::DuplicateEmail));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let svc = service();
        let err = svc.login("ghost", "pw", UserRole::User).await.unwrap_err();
        assert!(matches!(err, IdentityError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_verifies_password_and_reissues_token() {
        let svc = service();
        let registered = svc
            .register("a@x.com", "hunter22", UserRole::User, "alice")
            .await
            .unwrap();

        let err = svc.login("alice", "wrong", UserRole::User).await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCredentials));

        let session = svc.login("alice", "hunter22", UserRole::User).await.unwrap();
        assert_ne!(session.user.token, registered.user.token);
    }

    #[tokio::test]
    async fn test_login_without_stored_hash_accepts_any_password() {
        let svc = service();
        let seeded = User {
            id: UserId::new("user-test-1"),
            username: Username::parse("test").unwrap(),
            email: Email::parse("test@test.com").unwrap(),
            role: UserRole::User,
            token: None,
            password_hash: None,
        };
        svc.store.put(buckets::USERS, &vec![seeded]).unwrap();

        let session = svc.login("test", "anything", UserRole::User).await.unwrap();
        assert_eq!(session.user_id().as_str(), "user-test-1");
    }

    #[tokio::test]
    async fn test_logout_twice_is_idempotent() {
        let svc = service();
        svc.register("a@x.com", "pw", UserRole::User, "alice")
            .await
            .unwrap();

        svc.logout().unwrap();
        assert!(svc.current_user().unwrap().is_none());
        svc.logout().unwrap();
        assert!(svc.current_user().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reset_password_unknown_email() {
        let svc = service();
        let err = svc
            .reset_password("ghost@x.com", "new", "1234")
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::UserNotFound));
    }

    #[tokio::test]
    async fn test_reset_password_changes_credentials_not_session() {
        let svc = service();
        svc.register("a@x.com", "oldpw", UserRole::User, "alice")
            .await
            .unwrap();
        svc.logout().unwrap();

        svc.reset_password("a@x.com", "newpw", "1234").await.unwrap();

        // Session slot untouched by the reset
        assert!(svc.current_user().unwrap().is_none());
        // Old password no longer works, new one does
        assert!(svc.login("alice", "oldpw", UserRole::User).await.is_err());
        assert!(svc.login("alice", "newpw", UserRole::User).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_email_code_is_four_digits() {
        let svc = service();
        let code = svc.send_email_code("a@x.com").await;
        assert_eq!(code.len(), 4);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
