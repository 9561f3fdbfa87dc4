//! Application state and factory
//!
//! This module holds the state shared by the handlers and builds the
//! Actix-web application around it.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use ak_core::repositories::{LoginAuditRepository, RefreshTokenRepository, UserRepository};
use ak_core::services::session::SessionService;
use ak_core::services::user::PasswordHasher;
use ak_shared::config::{AppConfig, Environment, SessionConfig};
use ak_shared::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::{auth::AccessTokenVerifier, cors::create_cors, JwtAuth};
use crate::routes::auth::{login, logout, refresh_token, register};
use crate::routes::{health::health_check, hello::hello};

/// State shared by every handler
pub struct AppState<U, T, H, A>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
    A: LoginAuditRepository + 'static,
{
    pub session: Arc<SessionService<U, T, H, A>>,
    /// Refresh token cookie attributes
    pub cookies: SessionConfig,
    pub environment: Environment,
    pub allowed_origins: Vec<String>,
}

impl<U, T, H, A> AppState<U, T, H, A>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
    A: LoginAuditRepository + 'static,
{
    pub fn new(session: Arc<SessionService<U, T, H, A>>, config: &AppConfig) -> Self {
        Self {
            session,
            cookies: config.auth.session.clone(),
            environment: config.environment,
            allowed_origins: config.server.allowed_origins.clone(),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T, H, A>(
    app_state: web::Data<AppState<U, T, H, A>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: RefreshTokenRepository + 'static,
    H: PasswordHasher + 'static,
    A: LoginAuditRepository + 'static,
{
    let cors = create_cors(app_state.environment, &app_state.allowed_origins);
    let verifier: Arc<dyn AccessTokenVerifier> = app_state.session.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // CORS runs inside the request span
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<U, T, H, A>))
                .route("/login", web::post().to(login::<U, T, H, A>))
                .route("/refreshtoken", web::post().to(refresh_token::<U, T, H, A>))
                .route("/logout", web::post().to(logout::<U, T, H, A>)),
        )
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new(verifier))
                .route("/hello", web::get().to(hello)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
