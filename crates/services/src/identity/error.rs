//! Identity error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during identity operations.
///
/// The `#[error]` messages are the user-facing notification text; there are
/// no structured error codes beyond the variant itself.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] bamboo_box_core::EmailError),

    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] bamboo_box_core::UsernameError),

    /// Username taken at registration.
    #[error("this username is already registered")]
    DuplicateUsername,

    /// Email taken at registration.
    #[error("this email is already registered")]
    DuplicateEmail,

    /// No account matches the given username or email.
    #[error("account does not exist")]
    UserNotFound,

    /// Password verification failed.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Store access failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
