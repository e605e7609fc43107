//! Token Issuer
//!
//! Signed, time-limited session tokens (JWT, HS256) whose subject is the
//! authenticated email.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated email
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Freshly issued token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity recovered from a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub email: Email,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates session tokens
///
/// Keys are derived once from [`AuthConfig`] at startup.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.jwt_secret),
            decoding_key: DecodingKey::from_secret(&config.jwt_secret),
            validation,
            ttl: Duration::seconds(config.token_ttl_secs()),
        }
    }

    /// Issue a token for `identity`, valid for the configured TTL from now
    pub fn issue(&self, identity: &Email) -> AuthResult<IssuedToken> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if issued at `issued_at`
    pub fn issue_at(&self, identity: &Email, issued_at: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: identity.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a token and recover its identity
    ///
    /// ## Errors
    /// * `TokenExpired` - signature valid, `exp` in the past
    /// * `TokenInvalid` - anything else (malformed, wrong key, missing claims)
    pub fn validate(&self, token: &str) -> AuthResult<TokenIdentity> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            }
        })?;

        let expires_at =
            DateTime::from_timestamp(data.claims.exp, 0).ok_or(AuthError::TokenInvalid)?;
        let email = Email::new(data.claims.sub).map_err(|_| AuthError::TokenInvalid)?;

        Ok(TokenIdentity { email, expires_at })
    }
}
