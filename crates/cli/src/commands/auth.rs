//! Account and session commands.

use bamboo_box_core::UserRole;

use crate::Context;

/// Register a new account; the new session becomes current.
///
/// # Errors
///
/// Returns an error if the username or email is taken or the input is
/// malformed.
pub async fn register(
    ctx: &Context,
    email: &str,
    username: &str,
    password: &str,
    role: UserRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = ctx.identity.register(email, password, role, username).await?;
    println!(
        "registered {} ({}) as {}",
        session.user.username, session.user.email, session.role()
    );
    Ok(())
}

/// Log in and make the session current.
///
/// # Errors
///
/// Returns an error if the account does not exist or the password is wrong.
pub async fn login(
    ctx: &Context,
    username: &str,
    password: &str,
    role: UserRole,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = ctx.identity.login(username, password, role).await?;
    println!("logged in as {} ({})", session.user.username, session.role());
    Ok(())
}

/// Clear the current session.
///
/// # Errors
///
/// Returns an error if the session slot cannot be cleared.
pub fn logout(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    ctx.identity.logout()?;
    println!("logged out");
    Ok(())
}

/// Print the current session, if any.
///
/// # Errors
///
/// Returns an error if the session slot cannot be read.
pub fn whoami(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    match ctx.identity.current_user()? {
        Some(session) => println!(
            "{} <{}> role={} id={}",
            session.user.username,
            session.user.email,
            session.role(),
            session.user_id()
        ),
        None => println!("not logged in"),
    }
    Ok(())
}

/// Request a simulated verification code.
pub async fn send_code(ctx: &Context, email: &str) {
    let code = ctx.identity.send_email_code(email).await;
    println!("simulated email to {email}: your code is {code}");
}

/// Reset a password by email.
///
/// # Errors
///
/// Returns an error if no account has the given email.
pub async fn reset_password(
    ctx: &Context,
    email: &str,
    password: &str,
    code: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    ctx.identity.reset_password(email, password, code).await?;
    println!("password reset for {email}");
    Ok(())
}
