//! Bearer authentication middleware for protected endpoints.
//!
//! The middleware hands the raw `Authorization` header to a
//! [`BearerAuthorizer`] and, on success, injects an [`AuthContext`] into the
//! request extensions. Failures are answered directly with the error envelope.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use acct_core::domain::AccountId;
use acct_core::errors::ErrorKind;
use acct_core::services::BearerAuthorizer;

use crate::handlers::ApiError;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// Account the access token was issued to
    pub account_id: AccountId,
}

/// Bearer authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    authorizer: Arc<dyn BearerAuthorizer>,
}

impl JwtAuth {
    pub fn new(authorizer: Arc<dyn BearerAuthorizer>) -> Self {
        Self { authorizer }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            authorizer: Arc::clone(&self.authorizer),
        }))
    }
}

/// Bearer authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    authorizer: Arc<dyn BearerAuthorizer>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let authorizer = Arc::clone(&self.authorizer);

        Box::pin(async move {
            // A header that is not visible ASCII cannot carry a bearer token
            let header = match req
                .headers()
                .get(AUTHORIZATION)
                .map(|value| value.to_str().map(str::to_string))
                .transpose()
            {
                Ok(header) => header,
                Err(_) => {
                    let error = ApiError::new(ErrorKind::InvalidInput, "invalid bearer token");
                    return Ok(req.error_response(error).map_into_right_body());
                }
            };

            let account_id = match authorizer.authorize(header.as_deref()).await {
                Ok(account_id) => account_id,
                Err(e) => {
                    return Ok(req.error_response(ApiError::from(e)).map_into_right_body());
                }
            };

            req.extensions_mut().insert(AuthContext { account_id });

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extractor for the authenticated caller
///
/// Fails with `UNAUTHORIZED` when the route is not behind [`JwtAuth`].
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| ApiError::new(ErrorKind::Unauthorized, "authentication required").into());

        ready(result)
    }
}
