use actix_web::{web, HttpResponse};

use acct_core::repositories::AccountRepository;
use acct_shared::types::ApiResponse;

use crate::app::AppState;
use crate::dto::CountResponse;
use crate::handlers::handle_domain_error;

/// Handler for GET /v1/api/users/count
pub async fn count<R>(state: web::Data<AppState<R>>) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    match state.account_service.count().await {
        Ok(count) => HttpResponse::Ok().json(ApiResponse::ok(CountResponse { count })),
        Err(error) => handle_domain_error(error),
    }
}
