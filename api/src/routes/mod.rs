//! Route table for the versioned API

pub mod auth;
pub mod health;
pub mod users;

use std::sync::Arc;

use actix_web::web;

use acct_core::repositories::AccountRepository;
use acct_core::services::BearerAuthorizer;

use crate::middleware::JwtAuth;

/// Register every `/v1/api` route
///
/// Only the profile routes are wrapped in [`JwtAuth`].
pub fn configure<R>(cfg: &mut web::ServiceConfig, authorizer: Arc<dyn BearerAuthorizer>)
where
    R: AccountRepository + 'static,
{
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(auth::register::<R>))
            .route("/login", web::post().to(auth::login::<R>))
            .route("/refresh", web::post().to(auth::refresh::<R>)),
    )
    .service(
        web::scope("/users")
            .route("", web::get().to(users::list::<R>))
            .route("/count", web::get().to(users::count::<R>))
            .service(
                web::resource("/profile")
                    .route(web::get().to(users::get_profile::<R>))
                    .route(web::put().to(users::update_profile::<R>))
                    .route(web::delete().to(users::delete_profile::<R>))
                    .wrap(JwtAuth::new(authorizer)),
            ),
    );
}
