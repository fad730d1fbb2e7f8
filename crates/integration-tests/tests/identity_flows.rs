//! End-to-end identity scenarios: registration, login, logout, reset.

#![allow(clippy::unwrap_used)]

use bamboo_box_core::UserRole;
use bamboo_box_integration_tests::TestContext;
use bamboo_box_services::IdentityError;
use bamboo_box_services::store::buckets;

#[tokio::test]
async fn duplicate_registration_fails_and_store_is_unchanged() {
    let ctx = TestContext::seeded();
    let before = ctx.store.get_raw(buckets::USERS).unwrap().unwrap();

    // Seeded account already holds the username "test"
    let err = ctx
        .identity
        .register("fresh@x.com", "pw", UserRole::User, "test")
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::DuplicateUsername));

    // Seeded account already holds the email
    let err = ctx
        .identity
        .register("boss@test.com", "pw", UserRole::Merchant, "fresh")
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::DuplicateEmail));

    let after = ctx.store.get_raw(buckets::USERS).unwrap().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn seeded_accounts_log_in_with_any_password() {
    let ctx = TestContext::seeded();

    let session = ctx
        .identity
        .login("boss", "whatever", UserRole::Merchant)
        .await
        .unwrap();
    assert_eq!(session.role(), UserRole::Merchant);
    assert_eq!(session.user_id().as_str(), "merchant-boss-1");
}

#[tokio::test]
async fn logout_is_idempotent() {
    let ctx = TestContext::new();
    ctx.identity
        .register("a@x.com", "pw", UserRole::User, "alice")
        .await
        .unwrap();

    ctx.identity.logout().unwrap();
    assert!(ctx.identity.current_user().unwrap().is_none());
    ctx.identity.logout().unwrap();
    assert!(ctx.identity.current_user().unwrap().is_none());
}

#[tokio::test]
async fn password_reset_flow() {
    let ctx = TestContext::new();
    ctx.identity
        .register("a@x.com", "original", UserRole::User, "alice")
        .await
        .unwrap();
    ctx.identity.logout().unwrap();

    let code = ctx.identity.send_email_code("a@x.com").await;
    ctx.identity
        .reset_password("a@x.com", "fresh-password", &code)
        .await
        .unwrap();

    // Reset does not log anyone in
    assert!(ctx.identity.current_user().unwrap().is_none());

    let err = ctx
        .identity
        .login("alice", "original", UserRole::User)
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::InvalidCredentials));

    let session = ctx
        .identity
        .login("alice", "fresh-password", UserRole::User)
        .await
        .unwrap();
    assert_eq!(session.user.username.as_str(), "alice");
}

#[tokio::test]
async fn reset_for_unknown_email_fails() {
    let ctx = TestContext::new();
    let err = ctx
        .identity
        .reset_password("nobody@x.com", "pw", "0000")
        .await
        .unwrap_err();
    assert!(matches!(err, IdentityError::UserNotFound));
}
