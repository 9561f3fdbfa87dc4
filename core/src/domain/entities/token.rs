//! Token entities for JWT access tokens and opaque refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "authkeep";

/// Default JWT audience
pub const JWT_AUDIENCE: &str = "authkeep-api";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The username the token asserts
    /// * `lifetime` - How long the token stays valid
    /// * `issuer` - Value of the `iss` claim
    /// * `audience` - Value of the `aud` claim
    ///
    /// # Returns
    ///
    /// A new `Claims` instance expiring `lifetime` from now
    pub fn new_access_token(
        subject: impl Into<String>,
        lifetime: Duration,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let expiry = expires_after(now, lifetime);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// A token is still valid during the second named by `exp`.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// The username carried by the token
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

/// `now + lifetime`, saturating at the latest representable instant
fn expires_after(now: DateTime<Utc>, lifetime: Duration) -> DateTime<Utc> {
    now.checked_add_signed(lifetime)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Refresh token record persisted in the refresh token store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque random token value, unique across the store
    pub token: String,

    /// Username owning this token
    pub username: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    ///
    /// # Arguments
    ///
    /// * `token` - The opaque token value
    /// * `username` - The owning username
    /// * `lifetime` - Time until the token expires
    pub fn new(token: impl Into<String>, username: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now();

        Self {
            token: token.into(),
            username: username.into(),
            expires_at: expires_after(now, lifetime),
            created_at: now,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against a given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Whether the record belongs to `username`, ignoring ASCII case
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.username.eq_ignore_ascii_case(username)
    }

    /// Gets the time remaining until expiration
    ///
    /// # Returns
    ///
    /// A `Duration` representing the time until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}
