use actix_web::{web, HttpResponse};

use acct_core::domain::ListAccountsQuery;
use acct_core::errors::DomainError;
use acct_core::repositories::AccountRepository;
use acct_shared::types::{ApiResponse, CursorPagination};

use crate::app::AppState;
use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;

/// Handler for GET /v1/api/users
///
/// Query parameters: `cursor` (account id, exclusive), `limit` (clamped to
/// 1..=100, default 10) and `sort_asc` (default `false`).
pub async fn list<R>(
    state: web::Data<AppState<R>>,
    pagination: web::Query<CursorPagination>,
) -> HttpResponse
where
    R: AccountRepository + 'static,
{
    let query = match ListAccountsQuery::from_pagination(&pagination) {
        Ok(query) => query,
        Err(e) => return handle_domain_error(DomainError::from(e)),
    };

    match state.account_service.list(&query).await {
        Ok(accounts) => {
            let users: Vec<UserResponse> = accounts.iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::ok(users))
        }
        Err(error) => handle_domain_error(error),
    }
}
