//! Bearer token authentication for protected routes.
//!
//! This middleware extracts the access token from the Authorization header,
//! verifies it through the session service and injects the caller's
//! identity into the request. Any failure yields the same 401 body.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use ak_core::domain::entities::token::Claims;
use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::session::SessionService;
use ak_core::services::user::PasswordHasher;

use crate::handlers::error::unauthorized_response;

/// Identity of an authenticated caller
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Username taken from the `sub` claim
    pub username: String,
    /// Token ID, for log correlation
    pub jti: String,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            jti: claims.jti,
        }
    }
}

/// Anything able to check an access token
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Option<Claims>;
}

impl<U, T, H, A> AccessTokenVerifier for SessionService<U, T, H, A>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    H: PasswordHasher,
    A: LoginAuditRepository + 'static,
{
    fn verify_access_token(&self, token: &str) -> Option<Claims> {
        SessionService::verify_access_token(self, token)
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let claims =
            extract_bearer_token(&req).and_then(|token| self.verifier.verify_access_token(token));

        Box::pin(async move {
            let claims = match claims {
                Some(claims) => claims,
                None => {
                    debug!(path = %req.path(), "Rejected unauthenticated request");
                    return Ok(req
                        .into_response(unauthorized_response())
                        .map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext::from(claims));
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Error> =
            req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
                InternalError::from_response("authentication required", unauthorized_response())
                    .into()
            });

        ready(result)
    }
}
