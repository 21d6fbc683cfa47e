use actix_web::{web, HttpResponse};
use validator::Validate;

use acct_core::repositories::AccountRepository;
use acct_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{AuthResponse, LoginRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};

/// Handler for POST /v1/api/auth/login
///
/// ## Errors
/// - 400 INVALID_INPUT: Empty email or password
/// - 401 INVALID_CREDENTIALS: Unknown email or wrong password
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::ok(AuthResponse::from(result))),
        Err(error) => handle_domain_error(error),
    }
}
