//! Authenticated account endpoints
//!
//! Everything here sits behind `AuthMiddleware`; the user-management and
//! analysis scopes additionally carry permission guards.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::rbac::{ModulePermissions, PermissionValue};
use crate::auth::AuthenticatedUser;
use crate::core::models::{Role, UserSummary};
use crate::server::middleware::{RequirePermission, RequireRole};
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};

/// Configure authenticated routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(current_account))
        .service(
            web::scope("/users")
                .wrap(RequirePermission::new("user", "management", ["global"]))
                .route("", web::get().to(list_accounts)),
        )
        .service(
            web::scope("/ia")
                .wrap(RequirePermission::new(
                    "ia",
                    "analysis",
                    ["result_only", "full_analysis", "diagnostics"],
                ))
                .route("/analysis", web::get().to(analysis_access)),
        )
        .service(
            web::scope("/governance")
                .wrap(RequireRole::new([Role::Gobierno, Role::Admin]))
                .route("/reports", web::get().to(report_access)),
        );
}

/// Current account response
#[derive(Debug, Serialize)]
struct MeResponse {
    #[serde(flatten)]
    summary: UserSummary,
    permissions: ModulePermissions,
}

/// Account listing response
#[derive(Debug, Serialize)]
struct UsersResponse {
    users: Vec<UserSummary>,
}

/// Granted-level response, shared by the analysis and reports handlers
#[derive(Debug, Serialize)]
struct LevelResponse {
    level: PermissionValue,
}

/// Return the caller's account and permission snapshot
async fn current_account(
    identity: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    // A valid token for a deleted account is treated as unauthenticated.
    let user = state
        .storage
        .db()
        .find_user_by_id(identity.user_id)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let permissions = state.auth.matrix().permissions_for(user.role);

    Ok(HttpResponse::Ok().json(MeResponse {
        summary: UserSummary::from(&user),
        permissions,
    }))
}

/// List every account (user.management = global)
async fn list_accounts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let users = state.storage.db().list_users().await?;

    Ok(HttpResponse::Ok().json(UsersResponse {
        users: users.iter().map(UserSummary::from).collect(),
    }))
}

/// Report the caller's governance reporting level (gobierno and admin only)
async fn report_access(
    identity: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let level = state
        .auth
        .matrix()
        .permissions_for(identity.role)
        .get("governance")
        .and_then(|module| module.get("reports"))
        .cloned()
        .ok_or_else(|| AppError::internal("reports level missing for admitted role"))?;

    Ok(HttpResponse::Ok().json(LevelResponse { level }))
}

/// Report the caller's granted analysis level
async fn analysis_access(
    identity: AuthenticatedUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let level = state
        .auth
        .matrix()
        .permissions_for(identity.role)
        .get("ia")
        .and_then(|module| module.get("analysis"))
        .cloned()
        // The guard already admitted the caller; an absent grant here
        // would be a matrix bug.
        .ok_or_else(|| AppError::internal("analysis level missing for admitted role"))?;

    Ok(HttpResponse::Ok().json(LevelResponse { level }))
}
