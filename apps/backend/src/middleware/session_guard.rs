//! Session guard for the dashboard scope.
//!
//! Verifies the session token from the `session` cookie (or a Bearer
//! header) and answers 401 problem details before the request reaches a
//! handler. Verified claims land in request extensions.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_session_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub const SESSION_COOKIE: &str = "session";

pub struct SessionGuard;

impl<S, B> Transform<S, ServiceRequest> for SessionGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware { service }))
    }
}

pub struct SessionGuardMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SessionGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = token_from_request(&req);
        let state = req.app_data::<web::Data<AppState>>().cloned();

        let verified = match (token, state) {
            (Some(token), Some(state)) => verify_session_token(&token, &state.security),
            (None, _) => Err(AppError::unauthorized(
                "SESSION_MISSING",
                "Missing session token",
            )),
            (_, None) => Err(AppError::internal("AppState not available".to_string())),
        };

        match verified {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(err) => {
                let response = req.into_response(err.error_response().map_into_right_body());
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

fn token_from_request(req: &ServiceRequest) -> Option<String> {
    if let Some(cookie) = req.request().cookie(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(str::to_string)
}
