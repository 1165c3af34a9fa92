//! Mock authentication: input validation, the demo-account table and
//! fabricated token responses. Nothing here verifies or stores anything.

mod demo;

pub use demo::{find_demo_user, DemoUser, DEMO_USERS};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, AuthUser};

pub const MIN_PASSWORD_LEN: usize = 8;
/// Lifetime of mock tokens, in seconds.
pub const TOKEN_TTL_SECS: u64 = 900;
/// Demo sessions get an hour.
pub const DEMO_TOKEN_TTL_SECS: u64 = 3600;

pub const DEFAULT_ORGANIZATION_ID: &str = "org_default";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Credentials that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Checks shared by register and login. The order of the checks decides
/// which message the client sees when several fail at once.
pub fn validate_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> AppResult<Credentials<'a>> {
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }

    if !is_valid_email(email) {
        return Err(AppError::Validation("Invalid email format".to_string()));
    }

    Ok(Credentials { email, password })
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Session for a freshly registered or generically logged-in user.
pub fn mock_session(message: &'static str, email: &str, now_ms: i64) -> AuthResponse {
    AuthResponse {
        message,
        user: AuthUser {
            id: format!("user_{now_ms}"),
            email: email.to_string(),
            organization_id: DEFAULT_ORGANIZATION_ID.to_string(),
            role: None,
            persona: None,
        },
        access_token: format!("mock_access_token_{now_ms}"),
        refresh_token: format!("mock_refresh_token_{now_ms}"),
        expires_in: TOKEN_TTL_SECS,
        is_demo: None,
    }
}

pub fn demo_session(user: &DemoUser, now_ms: i64) -> AuthResponse {
    AuthResponse {
        message: "Demo login successful",
        user: AuthUser {
            id: user.id.to_string(),
            email: user.email.to_string(),
            organization_id: user.organization_id.to_string(),
            role: Some(user.role.to_string()),
            persona: Some(user.persona.to_string()),
        },
        access_token: format!("demo_access_token_{now_ms}"),
        refresh_token: format!("demo_refresh_token_{now_ms}"),
        expires_in: DEMO_TOKEN_TTL_SECS,
        is_demo: Some(true),
    }
}

/// Resolve a validated login: demo accounts with the right password get a
/// demo session, everything else falls through to the generic mock login.
pub fn login(credentials: Credentials<'_>, now_ms: i64) -> AuthResponse {
    match find_demo_user(credentials.email) {
        Some(demo) if demo.password == credentials.password => demo_session(demo, now_ms),
        _ => mock_session("Login successful", credentials.email, now_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: AppResult<Credentials<'_>>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_or_empty_fields_are_required() {
        let expected = "Email and password are required";
        assert_eq!(message(validate_credentials(None, Some("password1"))), expected);
        assert_eq!(message(validate_credentials(Some("a@b.co"), None)), expected);
        assert_eq!(message(validate_credentials(Some(""), Some("password1"))), expected);
        assert_eq!(message(validate_credentials(Some("a@b.co"), Some(""))), expected);
    }

    #[test]
    fn short_password_wins_over_bad_email() {
        let msg = message(validate_credentials(Some("not-an-email"), Some("short")));
        assert_eq!(msg, "Password must be at least 8 characters long");
    }

    #[test]
    fn password_length_boundary() {
        assert!(validate_credentials(Some("a@b.co"), Some("1234567")).is_err());
        assert!(validate_credentials(Some("a@b.co"), Some("12345678")).is_ok());
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+y@d.io"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in ["plain", "a@b", "@b.co", "a@.co", "a b@c.de", "a@@b.co", "a@b.co "] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn generic_session_shape() {
        let session = mock_session("Registration successful", "a@b.co", 1_700_000_000_000);
        assert_eq!(session.user.id, "user_1700000000000");
        assert_eq!(session.user.organization_id, "org_default");
        assert_eq!(session.access_token, "mock_access_token_1700000000000");
        assert_eq!(session.expires_in, 900);
        assert!(session.is_demo.is_none());
    }

    #[test]
    fn demo_login_with_right_password() {
        let creds = Credentials {
            email: "demo.manager@ayr.com",
            password: "DemoPass123!",
        };
        let session = login(creds, 42);
        assert_eq!(session.message, "Demo login successful");
        assert_eq!(session.user.role.as_deref(), Some("admin"));
        assert_eq!(session.user.persona.as_deref(), Some("store-manager"));
        assert_eq!(session.expires_in, 3600);
        assert_eq!(session.is_demo, Some(true));
        assert_eq!(session.access_token, "demo_access_token_42");
    }

    #[test]
    fn demo_email_with_wrong_password_falls_back() {
        let creds = Credentials {
            email: "demo.manager@ayr.com",
            password: "WrongPass123!",
        };
        let session = login(creds, 42);
        assert_eq!(session.message, "Login successful");
        assert_eq!(session.expires_in, 900);
        assert!(session.user.role.is_none());
    }

    #[test]
    fn session_serializes_mixed_case_keys() {
        let json = serde_json::to_value(demo_session(&DEMO_USERS[0], 7)).unwrap();
        assert_eq!(json["user"]["organizationId"], "demo_org_customer");
        assert_eq!(json["isDemo"], true);
        assert_eq!(json["expires_in"], 3600);

        let json = serde_json::to_value(mock_session("Login successful", "a@b.co", 7)).unwrap();
        assert!(json.get("isDemo").is_none());
        assert!(json["user"].get("role").is_none());
    }
}
