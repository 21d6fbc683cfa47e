use actix_web::{web, HttpResponse};
use validator::Validate;

use acct_core::repositories::AccountRepository;
use acct_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::{AuthResponse, RefreshTokenRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};

/// Handler for POST /v1/api/auth/refresh
///
/// Issues a new access token. The refresh token is echoed back unchanged and
/// `user` is `null`.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// ## Errors
/// - 401 UNAUTHORIZED: Expired, forged or non-refresh token
/// - 404 NOT_FOUND: The account behind the token no longer exists
pub async fn refresh<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth_service.refresh_token(&request.refresh_token).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::ok(AuthResponse::from(result))),
        Err(error) => handle_domain_error(error),
    }
}
