//! Sign-up and login flows

use crate::abstractions::{EmailSender, SecurityCodes};
use crate::error::{ErrorCode, ErrorExt};
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome aboard!";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Basic shape check: something, an `@`, a domain with a dot, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Register an address and send it the welcome message
///
/// Returns `false` without sending anything when the address is malformed.
pub async fn sign_up(email_sender: &dyn EmailSender, email: &str) -> Result<bool> {
    if !is_valid_email(email) {
        debug!(email, "Rejected sign-up with malformed address");
        return Ok(false);
    }

    email_sender
        .send_email(email, WELCOME_MESSAGE)
        .await
        .to_service_error(ErrorCode::SERVICE_EMAIL, "email", "Welcome email failed")?;
    info!(email, "Signed up");
    Ok(true)
}

/// Email a freshly generated one-time code to `email`
pub async fn login(
    security: &dyn SecurityCodes,
    email_sender: &dyn EmailSender,
    email: &str,
) -> Result<()> {
    let code = security.generate_code();
    email_sender
        .send_email(email, &code.to_string())
        .await
        .to_service_error(ErrorCode::SERVICE_EMAIL, "email", "Login code email failed")?;
    debug!(email, "Sent login code");
    Ok(())
}
