//! Authentication endpoints
//!
//! Google sign-in verification and session token issuance.

use crate::core::models::User;
use crate::server::routes::ApiResponse;
use crate::server::AppState;
use crate::services::GoogleProfile;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").route("/google", web::post().to(google_sign_in)));
}

/// Google sign-in request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleSignInRequest {
    /// Google ID token; the profile below is what the portal acts on
    #[allow(dead_code)]
    credential: Option<String>,
    /// Profile fields decoded from the Google response
    user_info: GoogleProfile,
}

/// User projection returned alongside the session token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionUser {
    id: Uuid,
    email: String,
    name: Option<String>,
    image: Option<String>,
    role: String,
    status: String,
    country: Option<String>,
    login_count: u64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
            role: user.role.to_string(),
            status: user.status.to_string(),
            country: user.country.clone(),
            login_count: user.login_count,
            created_at: user.metadata.created_at,
        }
    }
}

/// Authentication response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    user: SessionUser,
    token: String,
    expires_in: u64,
}

/// Google sign-in endpoint
///
/// The frontend completes the OAuth flow with Google and posts the profile
/// here; the handler enforces the allowed email domain, upserts the user
/// record, and answers with a portal session token.
pub async fn google_sign_in(
    state: web::Data<AppState>,
    request: web::Json<GoogleSignInRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    let mut user = state
        .services
        .users
        .upsert_from_auth(request.user_info)
        .await?;
    state.services.hydrate(&mut user).await;

    let token = state.jwt.create_session_token(&user).await?;
    info!("🔐 Signed in: {} ({})", user.email, user.role);

    let response = AuthResponse {
        user: SessionUser::from(&user),
        token,
        expires_in: state.jwt.expiration(),
    };
    Ok(ApiResponse::success(response).to_http_response())
}
