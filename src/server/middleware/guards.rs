//! Role and permission guards
//!
//! Scope-level gates composed in front of protected operations. Both
//! read the identity attached by `AuthMiddleware` and consult the
//! injected permission matrix; they have no side effects beyond
//! allow/deny.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpMessage};
use futures::future::{ready, Ready};
use tracing::debug;

use crate::auth::rbac::PermissionValue;
use crate::auth::AuthenticatedUser;
use crate::core::models::Role;
use crate::server::state::AppState;
use crate::utils::error::AppError;

/// Guard that admits only the listed roles
pub struct RequireRole {
    allowed: Rc<HashSet<Role>>,
}

impl RequireRole {
    /// Build a guard admitting `roles`
    pub fn new<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        Self {
            allowed: Rc::new(roles.into_iter().collect()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequireRoleService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleService {
            service,
            allowed: self.allowed.clone(),
        }))
    }
}

/// Service implementation for the role guard
pub struct RequireRoleService<S> {
    service: S,
    allowed: Rc<HashSet<Role>>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleService<S>
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
        let identity = req.extensions().get::<AuthenticatedUser>().cloned();

        match identity {
            None => Box::pin(async { Err(AppError::Unauthenticated.into()) }),
            Some(identity) if self.allowed.contains(&identity.role) => {
                Box::pin(self.service.call(req))
            }
            Some(identity) => {
                debug!(role = %identity.role, "role not in allowed set, denying");
                Box::pin(async { Err(AppError::Forbidden.into()) })
            }
        }
    }
}

/// Guard that requires a permission value in one module
pub struct RequirePermission {
    module: Rc<String>,
    key: Rc<String>,
    accepted: Rc<Vec<PermissionValue>>,
}

impl RequirePermission {
    /// Build a guard for `module.key`, admitting any of `accepted`
    pub fn new<M, K, I, V>(module: M, key: K, accepted: I) -> Self
    where
        M: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<PermissionValue>,
    {
        Self {
            module: Rc::new(module.into()),
            key: Rc::new(key.into()),
            accepted: Rc::new(accepted.into_iter().map(Into::into).collect()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequirePermission
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequirePermissionService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePermissionService {
            service,
            module: self.module.clone(),
            key: self.key.clone(),
            accepted: self.accepted.clone(),
        }))
    }
}

/// Service implementation for the permission guard
pub struct RequirePermissionService<S> {
    service: S,
    module: Rc<String>,
    key: Rc<String>,
    accepted: Rc<Vec<PermissionValue>>,
}

impl<S, B> Service<ServiceRequest> for RequirePermissionService<S>
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
        let identity = match req.extensions().get::<AuthenticatedUser>().cloned() {
            Some(identity) => identity,
            None => return Box::pin(async { Err(AppError::Unauthenticated.into()) }),
        };

        let state = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("Missing application state").into())
                })
            }
        };

        let matrix = state.auth.matrix();
        if matrix.has_any_permission(identity.role, &self.module, &self.key, &self.accepted) {
            return Box::pin(self.service.call(req));
        }

        // Same denial class either way; the sub-case only matters for logs.
        match matrix.module_grants(identity.role, &self.module) {
            None => debug!(
                role = %identity.role, module = %self.module,
                "role holds no permissions in module, denying"
            ),
            Some(_) => debug!(
                role = %identity.role, module = %self.module, key = %self.key,
                "permission value mismatch, denying"
            ),
        }

        Box::pin(async { Err(AppError::Forbidden.into()) })
    }
}
