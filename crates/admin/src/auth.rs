//! Demo admin login.
//!
//! There is no real authentication in the system: the dashboard accepts a
//! single well-known credential pair and nothing else.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

/// The demo username.
pub const DEMO_USERNAME: &str = "admin";
/// The demo password.
pub const DEMO_PASSWORD: &str = "password";

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// A logged-in admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Check the demo credentials.
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] for anything but the demo
/// pair.
pub fn login(username: &str, password: &str) -> Result<AdminSession, LoginError> {
    if username == DEMO_USERNAME && password == DEMO_PASSWORD {
        info!(username, "admin logged in");
        Ok(AdminSession {
            username: username.to_owned(),
            logged_in_at: Utc::now(),
        })
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_credentials_log_in() {
        let session = login("admin", "password").unwrap();
        assert_eq!(session.username, "admin");
    }

    #[test]
    fn test_everything_else_is_rejected() {
        assert_eq!(login("admin", "hunter2"), Err(LoginError::InvalidCredentials));
        assert_eq!(login("root", "password"), Err(LoginError::InvalidCredentials));
        assert_eq!(login("", ""), Err(LoginError::InvalidCredentials));
    }
}
