//! Access token signer

use ak_shared::config::auth::MIN_SECRET_BYTES;
use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::{max_token_lifetime, TokenSignerConfig};

/// Issues and verifies HS256 access tokens
///
/// Holds only the keys and the expiry policy, so one instance can be shared
/// freely between tasks.
pub struct TokenSigner {
    config: TokenSignerConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    /// Creates a new signer
    ///
    /// # Arguments
    ///
    /// * `config` - Secret, lifetime and issuer/audience values
    ///
    /// # Returns
    ///
    /// A new `TokenSigner`, or an error if the secret is shorter than
    /// the HS256 minimum or the lifetime is not positive or exceeds ten years
    pub fn new(config: TokenSignerConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.as_bytes().len() < MIN_SECRET_BYTES {
            return Err(TokenError::WeakSigningKey {
                min_bytes: MIN_SECRET_BYTES,
            }
            .into());
        }
        if config.access_token_lifetime <= Duration::zero() {
            return Err(DomainError::Validation {
                message: "access token lifetime must be positive".to_string(),
            });
        }
        if config.access_token_lifetime > max_token_lifetime() {
            return Err(DomainError::Validation {
                message: "access token lifetime is too long".to_string(),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issue an access token for `subject`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed token expiring one access lifetime from now
    /// * `Err(DomainError::Validation)` - `subject` is blank
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        if subject.trim().is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }

        let claims = Claims::new_access_token(
            subject,
            self.config.access_token_lifetime,
            self.config.issuer.as_str(),
            self.config.audience.as_str(),
        );
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verify a token and report why it was rejected
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature, issuer, audience and expiry all check out
    /// * `Err(TokenError)` - `TokenExpired`, `InvalidSignature`, or
    ///   `InvalidTokenFormat` for everything else
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            })
    }

    /// Verify a token, failing closed
    ///
    /// Malformed input is an ordinary `None`, never an error or a panic.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        self.validate(token).ok()
    }

    /// Lifetime applied to newly issued access tokens
    pub fn access_token_lifetime(&self) -> Duration {
        self.config.access_token_lifetime
    }
}
