use actix_web::{web, HttpResponse};
use validator::Validate;

use acct_core::repositories::AccountRepository;
use acct_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{AuthResponse, RegisterRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};

/// Handler for POST /v1/api/auth/register
///
/// Creates an account and returns its first token pair.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Ann",
///     "email": "ann@x.com",
///     "password": "secret-pass"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "success": true,
///     "result": {
///         "access_token": "eyJ...",
///         "refresh_token": "eyJ...",
///         "user": { "id": "...", "email": "ann@x.com", "name": "Ann", "created_at": 1717200000000 }
///     }
/// }
/// ```
///
/// ## Errors
/// - 400 INVALID_INPUT: Name, email or password out of bounds
/// - 409 ALREADY_EXISTS: Email already registered
pub async fn register<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(result) => HttpResponse::Created().json(ApiResponse::ok(AuthResponse::from(result))),
        Err(error) => handle_domain_error(error),
    }
}
