//! Helper functions for middleware

use crate::core::models::RequestOrigin;
use actix_web::http::header::HeaderMap;
use actix_web::HttpRequest;

/// Extract a bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers.get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str
        .strip_prefix("Bearer ")
        .map(|stripped| stripped.to_string())
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health", "/api/auth/google", "/api/chat"];

    PUBLIC_ROUTES.iter().any(|&route| path.starts_with(route))
}

/// Capture the client IP and user agent for audit entries
pub fn request_origin(req: &HttpRequest) -> RequestOrigin {
    RequestOrigin {
        ip_address: req
            .connection_info()
            .realip_remote_addr()
            .map(|s| s.to_string()),
        user_agent: req
            .headers()
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string()),
    }
}
