//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{test, web};
use serde_json::{json, Value};

use acct_api::AppState;
use acct_core::repositories::InMemoryAccountRepository;
use acct_core::services::{CredentialCodec, TokenService, TokenServiceConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "correct-horse";
const MIN_BCRYPT_COST: u32 = 4;

/// Fresh in-memory state with the cheapest bcrypt cost
pub fn test_state() -> web::Data<AppState<InMemoryAccountRepository>> {
    let repository = Arc::new(InMemoryAccountRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap());
    web::Data::new(AppState::new(
        repository,
        token_service,
        CredentialCodec::with_cost(MIN_BCRYPT_COST),
    ))
}

pub fn register_request(name: &str, email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/v1/api/auth/register")
        .set_json(json!({ "name": name, "email": email, "password": password }))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn refresh_request(refresh_token: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/v1/api/auth/refresh")
        .set_json(json!({ "refresh_token": refresh_token }))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// `result` member of a success envelope
pub fn result_of(body: &Value) -> &Value {
    assert_eq!(body["success"], json!(true), "unexpected envelope: {}", body);
    &body["result"]
}

/// `code` member of an error envelope
pub fn code_of(body: &Value) -> &str {
    assert_eq!(body["success"], json!(false), "unexpected envelope: {}", body);
    body["code"].as_str().unwrap_or_default()
}
