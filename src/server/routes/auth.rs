//! Authentication endpoints
//!
//! Cedula verification, registration, and login. These are the only
//! public API routes; everything else sits behind the auth middleware.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::rbac::ModulePermissions;
use crate::auth::{AuthSession, CedulaLookup, RegistrationRequest};
use crate::core::models::UserSummary;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/check-cedula", web::post().to(check_cedula))
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}

/// Cedula verification request
#[derive(Debug, Deserialize)]
struct CheckCedulaRequest {
    cedula: Option<String>,
}

/// User registration request
#[derive(Debug, Deserialize)]
struct RegisterRequest {
    cedula: Option<String>,
    name: Option<String>,
    surname: Option<String>,
    password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize)]
struct LoginRequest {
    cedula: Option<String>,
    password: Option<String>,
}

/// Name parts attached to a cedula verification result
#[derive(Debug, Serialize)]
struct PersonData {
    name: String,
    surname: String,
}

/// Cedula verification response: a registered account carries `user`,
/// anything else carries `data` (possibly null)
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum CheckCedulaResponse {
    Registered {
        exists: bool,
        message: String,
        user: PersonData,
    },
    Unregistered {
        exists: bool,
        message: String,
        data: Option<PersonData>,
    },
}

/// Account payload issued with a session
#[derive(Debug, Serialize)]
struct AccountPayload {
    #[serde(flatten)]
    summary: UserSummary,
    permissions: ModulePermissions,
}

/// Session response for register and login
#[derive(Debug, Serialize)]
struct SessionResponse {
    token: String,
    user: AccountPayload,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: AccountPayload {
                summary: session.user,
                permissions: session.permissions,
            },
        }
    }
}

/// Cedula verification endpoint
async fn check_cedula(
    state: web::Data<AppState>,
    request: web::Json<CheckCedulaRequest>,
) -> Result<HttpResponse> {
    let cedula = request.cedula.clone().unwrap_or_default();

    let response = match state.auth.check_cedula(&cedula).await? {
        CedulaLookup::Registered { name, surname } => CheckCedulaResponse::Registered {
            exists: true,
            message: "An account with this cedula already exists".to_string(),
            user: PersonData { name, surname },
        },
        CedulaLookup::Candidate { name, surname } => CheckCedulaResponse::Unregistered {
            exists: false,
            message: "Identity verified, no account yet".to_string(),
            data: Some(PersonData { name, surname }),
        },
        CedulaLookup::Unknown => CheckCedulaResponse::Unregistered {
            exists: false,
            message: "No data found for this cedula".to_string(),
            data: None,
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// User registration endpoint
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    info!("registration attempt");

    let session = state
        .auth
        .register(RegistrationRequest {
            cedula: request.cedula.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            surname: request.surname.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
        })
        .await?;

    Ok(HttpResponse::Created().json(SessionResponse::from(session)))
}

/// User login endpoint
async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let session = state
        .auth
        .login(
            request.cedula.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(SessionResponse::from(session)))
}
