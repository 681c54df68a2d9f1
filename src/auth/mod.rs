pub mod middleware;

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::Config, error::Error};

pub const ADMIN_COOKIE: &str = "admin_token";

/// Sessions live for 24 hours from issuance; the cookie expires with them.
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claims embedded in the session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Fixed role claim, always `admin`
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Check a submitted password against the configured admin password.
///
/// An unconfigured password is a configuration error, never a match.
pub fn verify_password(config: &Config, password: &str) -> Result<bool, Error> {
    let expected = config.admin_password()?;
    Ok(password == expected)
}

/// Sign a fresh admin session token with the configured secret.
pub fn issue_token(config: &Config) -> Result<String, Error> {
    let secret = config.token_secret()?;
    let now = Utc::now().timestamp();

    let claims = Claims {
        role: "admin".to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECONDS,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("failed to sign session token: {e}")))
}

/// True iff the token's signature checks out against the secret and it has
/// not expired. Parse, signature and expiry failures all come back as false.
pub fn verify_token(secret: &str, token: &str) -> bool {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .is_ok()
}

/// Cookie-based auth check run independently by every mutating content
/// handler; the page gate is not relied on for API routes.
pub fn require_admin(config: &Config, headers: &HeaderMap) -> Result<(), Error> {
    let secret = config.token_secret()?;
    let token = extract_admin_token(headers).ok_or(Error::Unauthorized)?;

    if verify_token(secret, &token) {
        Ok(())
    } else {
        Err(Error::Unauthorized)
    }
}

/// Build the `Set-Cookie` value carrying the session token.
///
/// The token travels only in this http-only cookie, never in a response body.
pub fn session_cookie(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{ADMIN_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={TOKEN_TTL_SECONDS}"
    ))
}

pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("admin_token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
}

/// Pull the session token out of the request's `Cookie` header, if present.
pub fn extract_admin_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;

    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == ADMIN_COOKIE {
            return Some(val.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            admin_password: Some("hunter2".to_string()),
            token_secret: Some("unit-test-secret".to_string()),
            database_dsn: None,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let config = test_config();
        let token = issue_token(&config).unwrap();
        assert!(verify_token("unit-test-secret", &token));
    }

    #[test]
    fn issued_token_carries_admin_role_and_24h_expiry() {
        let config = test_config();
        let token = issue_token(&config).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"unit-test-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.role, "admin");
        assert_eq!(data.claims.exp - data.claims.iat, TOKEN_TTL_SECONDS);
    }

    #[test]
    fn token_fails_against_wrong_secret() {
        let config = test_config();
        let token = issue_token(&config).unwrap();
        assert!(!verify_token("some-other-secret", &token));
    }

    #[test]
    fn garbage_token_fails() {
        assert!(!verify_token("unit-test-secret", "not.a.token"));
    }

    #[test]
    fn expired_token_fails() {
        let now = Utc::now().timestamp();
        // Two hours in the past, well beyond the default validation leeway.
        let claims = Claims {
            role: "admin".to_string(),
            iat: now - TOKEN_TTL_SECONDS,
            exp: now - 2 * 60 * 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert!(!verify_token("unit-test-secret", &token));
    }

    #[test]
    fn issue_without_secret_is_a_configuration_error() {
        let config = Config {
            token_secret: None,
            ..test_config()
        };
        assert!(matches!(
            issue_token(&config),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn password_check_matches_configured_value() {
        let config = test_config();
        assert!(verify_password(&config, "hunter2").unwrap());
        assert!(!verify_password(&config, "letmein").unwrap());
    }

    #[test]
    fn password_check_fails_closed_when_unconfigured() {
        let config = Config {
            admin_password: None,
            ..test_config()
        };
        assert!(matches!(
            verify_password(&config, "anything"),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn cookie_extraction_finds_the_admin_token() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("admin_token=abc123"));
        assert_eq!(extract_admin_token(&headers), Some("abc123".to_string()));

        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; admin_token=xyz; lang=en"),
        );
        assert_eq!(extract_admin_token(&headers), Some("xyz".to_string()));
    }

    #[test]
    fn cookie_extraction_ignores_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_admin_token(&headers), None);

        assert_eq!(extract_admin_token(&HeaderMap::new()), None);
    }

    #[test]
    fn session_cookie_is_http_only_and_strict() {
        let cookie = session_cookie("tok").unwrap();
        let value = cookie.to_str().unwrap();
        assert!(value.starts_with("admin_token=tok"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("SameSite=Strict"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=86400"));
    }
}
