//! Session service implementation

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use crate::domain::entities::audit::LoginContext;
use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use crate::services::audit::LoginAuditService;
use crate::services::token::{RefreshTokenService, TokenSigner};
use crate::services::user::{PasswordHasher, UserService};

/// Login, refresh and logout on top of the token services
pub struct SessionService<U, T, H, A>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    H: PasswordHasher,
    A: LoginAuditRepository,
{
    users: UserService<U, H>,
    refresh_tokens: RefreshTokenService<T, U>,
    signer: Arc<TokenSigner>,
    audit: LoginAuditService<A>,
}

impl<U, T, H, A> SessionService<U, T, H, A>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    H: PasswordHasher,
    A: LoginAuditRepository + 'static,
{
    /// Creates a new session service
    ///
    /// # Arguments
    ///
    /// * `users` - Registration and credential checks
    /// * `refresh_tokens` - Refresh token lifecycle
    /// * `signer` - Access token signer, shared with `refresh_tokens`
    /// * `audit` - Login audit trail
    pub fn new(
        users: UserService<U, H>,
        refresh_tokens: RefreshTokenService<T, U>,
        signer: Arc<TokenSigner>,
        audit: LoginAuditService<A>,
    ) -> Self {
        Self {
            users,
            refresh_tokens,
            signer,
            audit,
        }
    }

    /// Register a new user
    pub async fn register(&self, username: &str, password: &str) -> DomainResult<User> {
        self.users.register(username, password).await
    }

    /// Authenticate and open a session
    ///
    /// Opening a session ends any session the user already had.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Fresh access and refresh tokens
    /// * `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        context: &LoginContext,
    ) -> DomainResult<TokenPair> {
        let user = match self.users.authenticate(username, password).await {
            Ok(user) => user,
            Err(err) => {
                if matches!(err, DomainError::Auth(AuthError::InvalidCredentials)) {
                    self.audit.record_login(username.trim(), context, false).await;
                }
                return Err(err);
            }
        };

        let access_token = self.signer.issue(&user.username)?;
        let refresh_token = self.refresh_tokens.create(&user.username).await?;

        self.audit.record_login(&user.username, context, true).await;
        info!(username = %user.username, "User logged in");

        Ok(self.token_pair(access_token, refresh_token))
    }

    /// Exchange a refresh token for a new token pair
    ///
    /// Missing, unknown, expired and orphaned tokens all come back as
    /// `DomainError::Unauthorized`; the precise reason is only logged.
    /// Storage and internal failures keep their own class.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> DomainResult<TokenPair> {
        let token = match refresh_token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                debug!(reason = "missing", "Refresh rejected");
                return Err(DomainError::Unauthorized);
            }
        };

        match self.refresh_tokens.rotate(token).await {
            Ok((access_token, refresh_token)) => Ok(self.token_pair(access_token, refresh_token)),
            Err(err) if err.is_token_rejection() => {
                info!(reason = %err, "Refresh rejected");
                Err(DomainError::Unauthorized)
            }
            Err(err) => {
                warn!(error = %err, "Refresh failed");
                Err(err)
            }
        }
    }

    /// End a session
    ///
    /// An absent or unknown token is not an error. A storage failure is.
    pub async fn logout(&self, refresh_token: Option<&str>) -> DomainResult<()> {
        match refresh_token.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => self.refresh_tokens.delete(token).await,
            None => Ok(()),
        }
    }

    /// Verify an access token, failing closed
    pub fn verify_access_token(&self, token: &str) -> Option<Claims> {
        self.signer.verify(token)
    }

    /// Refresh token lifetime, used for the cookie Max-Age
    pub fn refresh_token_lifetime(&self) -> Duration {
        self.refresh_tokens.lifetime()
    }

    fn token_pair(&self, access_token: String, refresh_token: RefreshToken) -> TokenPair {
        TokenPair::new(
            access_token,
            refresh_token.token,
            self.signer.access_token_lifetime().num_seconds(),
            self.refresh_tokens.lifetime().num_seconds(),
        )
    }
}
