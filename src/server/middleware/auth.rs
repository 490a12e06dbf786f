//! Authentication middleware
//!
//! Verifies the bearer token on every non-public route and attaches the
//! caller identity to request extensions. A missing, malformed, expired,
//! or badly-signed token is rejected before any role logic runs.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

use crate::auth::AuthenticatedUser;
use crate::server::state::AppState;
use crate::utils::error::AppError;

use super::helpers::{extract_bearer_token, is_public_route};

/// Auth middleware for Actix-web
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public_route(req.path()) {
            return Box::pin(self.service.call(req));
        }

        let identity = req
            .app_data::<web::Data<AppState>>()
            .zip(extract_bearer_token(req.headers()))
            .and_then(|(state, token)| state.auth.authenticate(&token).ok());

        match identity {
            Some(identity) => {
                debug!(account = %identity.user_id, role = %identity.role, "request authenticated");
                req.extensions_mut().insert(identity);
                Box::pin(self.service.call(req))
            }
            None => Box::pin(async { Err(AppError::Unauthenticated.into()) }),
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthenticated.into()),
        )
    }
}
