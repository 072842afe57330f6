//! Authentication middleware

use crate::core::models::User;
use crate::server::middleware::helpers::{bearer_token, is_public_route};
use crate::server::AppState;
use crate::utils::error::PortalError;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Auth middleware for Actix-web
///
/// Public routes pass through untouched. Every other route must carry a
/// bearer session token; the middleware verifies it, resolves the user by
/// the email claim, and stores the hydrated record in request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let path = req.path().to_string();

        if is_public_route(&path) {
            return Box::pin(service.call(req));
        }

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                return Err(actix_web::error::ErrorInternalServerError(
                    "Missing application state",
                ));
            };

            let Some(token) = bearer_token(req.headers()) else {
                debug!("No bearer token for protected route: {}", path);
                return Err(PortalError::unauthorized("No authorization token provided").into());
            };

            let claims = state.jwt.verify_token(&token).await?;

            let Some(mut user) = state.services.users.get_by_email(&claims.email).await else {
                warn!("Token for unknown user: {}", claims.email);
                return Err(PortalError::unauthorized("Unknown user").into());
            };
            state.services.hydrate(&mut user).await;

            debug!("Authenticated {} for {}", user.email, path);
            req.extensions_mut().insert(user);

            service.call(req).await
        })
    }
}

/// Extract the authenticated user from request extensions
pub fn get_request_user(req: &HttpRequest) -> Result<User, actix_web::Error> {
    req.extensions()
        .get::<User>()
        .cloned()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Missing authenticated user"))
}
