//! Application state and factory
//!
//! This module wires the core services into shared state and provides the
//! factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use acct_core::repositories::AccountRepository;
use acct_core::services::{
    AccessGuard, AccountService, AuthService, BearerAuthorizer, CredentialCodec, TokenService,
};
use acct_shared::config::CorsConfig;
use acct_shared::error_codes;
use acct_shared::types::ApiResponse;

use crate::handlers::error::{json_error_handler, query_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: AccountRepository,
{
    pub auth_service: Arc<AuthService<R>>,
    pub account_service: Arc<AccountService<R>>,
    pub authorizer: Arc<dyn BearerAuthorizer>,
}

impl<R> AppState<R>
where
    R: AccountRepository + 'static,
{
    /// Build every service over one account store and one token service
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>, codec: CredentialCodec) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&repository),
                Arc::clone(&token_service),
                codec,
            )),
            account_service: Arc::new(AccountService::new(Arc::clone(&repository))),
            authorizer: Arc::new(AccessGuard::new(repository, token_service)),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    cors: CorsConfig,
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
    R: AccountRepository + 'static,
{
    let authorizer = Arc::clone(&app_state.authorizer);

    App::new()
        // Add application state
        .app_data(app_state)
        // Undecodable bodies and query strings answer with the error envelope
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Add middleware (the last one wrapped runs first)
        .wrap(create_cors(&cors))
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(routes::health::health_check))
        // API v1 routes
        .service(web::scope("/v1/api").configure(move |cfg| routes::configure::<R>(cfg, authorizer)))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(
        error_codes::NOT_FOUND,
        "the requested resource was not found",
    ))
}
