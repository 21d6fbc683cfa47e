//! Integration tests for the bearer authentication middleware

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use serde_json::Value;

use acct_api::create_app;
use acct_api::middleware::AuthContext;
use acct_shared::config::CorsConfig;

use common::{code_of, register_request, result_of, PASSWORD};

#[actix_web::test]
async fn test_missing_header_is_invalid_input() {
    let app = test::init_service(create_app(common::test_state(), CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/v1/api/users/profile").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), "INVALID_INPUT");
}

#[actix_web::test]
async fn test_wrong_scheme_is_invalid_input() {
    let app = test::init_service(create_app(common::test_state(), CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/api/users/profile")
        .insert_header(("Authorization", "Token abc.def.ghi"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), "INVALID_INPUT");
}

#[actix_web::test]
async fn test_garbage_token_is_unauthorized() {
    let app = test::init_service(create_app(common::test_state(), CorsConfig::default())).await;

    let req = test::TestRequest::get()
        .uri("/v1/api/users/profile")
        .insert_header(("Authorization", "Bearer invalid-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_refresh_token_cannot_open_protected_routes() {
    let app = test::init_service(create_app(common::test_state(), CorsConfig::default())).await;

    let body: Value =
        test::call_and_read_body_json(&app, register_request("Ann", "ann@x.com", PASSWORD).to_request()).await;
    let refresh_token = result_of(&body)["refresh_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/v1/api/users/profile")
        .insert_header(common::bearer(&refresh_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_deleted_account_is_locked_out() {
    let app = test::init_service(create_app(common::test_state(), CorsConfig::default())).await;

    let body: Value =
        test::call_and_read_body_json(&app, register_request("Ann", "ann@x.com", PASSWORD).to_request()).await;
    let access_token = result_of(&body)["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri("/v1/api/users/profile")
        .insert_header(common::bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Same token, still unexpired
    let req = test::TestRequest::get()
        .uri("/v1/api/users/profile")
        .insert_header(common::bearer(&access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(code_of(&body), "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_auth_context_extractor_without_middleware() {
    async fn protected_handler(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().body(auth.account_id.to_string())
    }

    let app = test::init_service(App::new().route("/protected", web::get().to(protected_handler))).await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
