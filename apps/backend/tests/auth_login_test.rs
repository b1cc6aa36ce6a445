//! The login route: session establishment, form feedback, fault rendering.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use backend::auth::provider::{
    AuthFailure, Credentials, IdentityProvider, ProviderError, VerifiedUser,
};
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::{DatabaseBackend, MockDatabase};

#[derive(Clone, Copy)]
enum Mode {
    Accept,
    Mismatch,
    Fault,
}

struct FakeProvider(Mode);

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn verify(&self, credentials: &Credentials) -> Result<VerifiedUser, ProviderError> {
        match self.0 {
            Mode::Accept => Ok(VerifiedUser {
                subject: "user-1".to_string(),
                email: credentials.email.clone(),
            }),
            Mode::Mismatch => Err(ProviderError::Auth(AuthFailure::CredentialsMismatch)),
            Mode::Fault => Err(ProviderError::Fault("verifier unreachable".into())),
        }
    }
}

fn app_state(mode: Mode) -> web::Data<AppState> {
    web::Data::new(AppState::new(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        Arc::new(FakeProvider(mode)),
        SecurityConfig::for_tests(),
    ))
}

async fn post_login(
    data: web::Data<AppState>,
) -> actix_web::dev::ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(data)
            .service(web::scope("/login").configure(routes::auth::configure_routes)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "amy@example.com"), ("password", "pw")])
        .to_request();
    test::call_service(&app, req).await
}

#[actix_web::test]
async fn a_verified_login_sets_the_session_and_navigates() {
    let resp = post_login(app_state(Mode::Accept)).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").expect("location").to_str().unwrap(),
        "/dashboard"
    );
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .expect("session cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[actix_web::test]
async fn a_rejected_login_renders_the_form_message() {
    let resp = post_login(app_state(Mode::Mismatch)).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials.");
}

#[actix_web::test]
async fn a_provider_fault_renders_the_generic_failure_document() {
    let resp = post_login(app_state(Mode::Fault)).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INTERNAL");
    assert_eq!(body["status"], 500);
    // The fault detail stays on the server side of the boundary.
    let detail = body["detail"].as_str().expect("detail");
    assert!(!detail.contains("unreachable"));
}
