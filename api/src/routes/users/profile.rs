//! Profile endpoints for the authenticated caller
//!
//! All three handlers sit behind `JwtAuth` and act on the account named by
//! the access token.

use actix_web::{web, HttpResponse};
use validator::Validate;

use acct_core::repositories::AccountRepository;
use acct_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{UpdateProfileRequest, UserResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};
use crate::middleware::AuthContext;

/// Handler for GET /v1/api/users/profile
pub async fn get_profile<R>(state: web::Data<AppState<R>>, auth: AuthContext) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.account_service.get(auth.account_id).await {
        Ok(account) => HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(&account))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /v1/api/users/profile
///
/// ## Errors
/// - 400 INVALID_INPUT: Name or email out of bounds
/// - 409 ALREADY_EXISTS: Email belongs to another account
pub async fn update_profile<R>(
    state: web::Data<AppState<R>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .account_service
        .update_profile(auth.account_id, &request.name, &request.email)
        .await
    {
        Ok(account) => HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(&account))),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /v1/api/users/profile
///
/// Tokens already issued to the account stop working on the next request.
pub async fn delete_profile<R>(state: web::Data<AppState<R>>, auth: AuthContext) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.account_service.delete(auth.account_id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::empty()),
        Err(error) => handle_domain_error(error),
    }
}
