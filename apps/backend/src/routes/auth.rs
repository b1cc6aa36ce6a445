//! Credentials login.

use std::time::SystemTime;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::actions::views;
use crate::auth::jwt::mint_session_token;
use crate::auth::provider::Credentials;
use crate::error::AppError;
use crate::middleware::session_guard::SESSION_COOKIE;
use crate::services::auth::{authenticate, AuthOutcome};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// POST /login
///
/// Verifies credentials against the identity provider. Classified failures
/// come back as a message for the form; success establishes the session
/// cookie and navigates to the dashboard. Unclassified provider faults
/// propagate and render the generic failure document.
async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let credentials = Credentials {
        email: form.email,
        password: form.password,
    };

    match authenticate(state.identity.as_ref(), &credentials).await? {
        AuthOutcome::Verified(user) => {
            let token =
                mint_session_token(&user.subject, &user.email, SystemTime::now(), &state.security)?;
            let cookie = Cookie::build(SESSION_COOKIE, token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();

            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, views::DASHBOARD))
                .cookie(cookie)
                .finish())
        }
        AuthOutcome::Rejected(message) => {
            Ok(HttpResponse::Ok().json(serde_json::json!({ "message": message })))
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(login)));
}
