//! Board session endpoints behind the session guard.

use std::sync::Arc;
use std::time::SystemTime;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use async_trait::async_trait;
use backend::auth::jwt::mint_session_token;
use backend::auth::provider::{
    AuthFailure, Credentials, IdentityProvider, ProviderError, VerifiedUser,
};
use backend::middleware::session_guard::SessionGuard;
use backend::routes;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use sea_orm::{DatabaseBackend, MockDatabase};

/// The board endpoints never consult the provider; any stub will do.
struct RejectingProvider;

#[async_trait]
impl IdentityProvider for RejectingProvider {
    async fn verify(&self, _credentials: &Credentials) -> Result<VerifiedUser, ProviderError> {
        Err(ProviderError::Auth(AuthFailure::Rejected))
    }
}

fn test_state() -> AppState {
    AppState::new(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        Arc::new(RejectingProvider),
        SecurityConfig::for_tests(),
    )
}

fn session_cookie(state: &AppState) -> Cookie<'static> {
    let token = mint_session_token("user-1", "amy@example.com", SystemTime::now(), &state.security)
        .expect("mint");
    Cookie::new("session", token)
}

#[actix_web::test]
async fn dashboard_scope_rejects_missing_sessions() {
    let data = web::Data::new(test_state());
    let app = test::init_service(
        App::new().app_data(data.clone()).service(
            web::scope("/dashboard")
                .wrap(SessionGuard)
                .configure(routes::dashboard_scope),
        ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/dashboard/tic-tac-toe/sessions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "SESSION_MISSING");
}

#[actix_web::test]
async fn a_bearer_token_also_opens_the_dashboard_scope() {
    let data = web::Data::new(test_state());
    let token = mint_session_token("user-1", "amy@example.com", SystemTime::now(), &data.security)
        .expect("mint");
    let app = test::init_service(
        App::new().app_data(data.clone()).service(
            web::scope("/dashboard")
                .wrap(SessionGuard)
                .configure(routes::dashboard_scope),
        ),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/dashboard/tic-tac-toe/sessions")
        .insert_header(("authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn a_full_game_plays_out_over_the_endpoints() {
    let data = web::Data::new(test_state());
    let cookie = session_cookie(&data);
    let app = test::init_service(
        App::new().app_data(data.clone()).service(
            web::scope("/dashboard")
                .wrap(SessionGuard)
                .configure(routes::dashboard_scope),
        ),
    )
    .await;

    // Start a session.
    let req = test::TestRequest::post()
        .uri("/dashboard/tic-tac-toe/sessions")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let board: serde_json::Value = test::read_body_json(resp).await;
    let id = board["id"].as_str().expect("session id").to_string();
    assert_eq!(board["next_player"], "X");
    assert!(board["winner"].is_null());

    // X at 0, O at 3, X at 1, O at 4, X at 2 -> X wins on the top row.
    let mut last = board;
    for cell in [0, 3, 1, 4, 2] {
        let req = test::TestRequest::post()
            .uri(&format!("/dashboard/tic-tac-toe/sessions/{id}/marks"))
            .cookie(cookie.clone())
            .set_json(serde_json::json!({ "cell": cell }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        last = test::read_body_json(resp).await;
    }
    assert_eq!(last["winner"], "X");
    assert_eq!(last["cells"][0], "X");
    assert_eq!(last["cells"][3], "O");

    // Marks after the win change nothing.
    let req = test::TestRequest::post()
        .uri(&format!("/dashboard/tic-tac-toe/sessions/{id}/marks"))
        .cookie(cookie.clone())
        .set_json(serde_json::json!({ "cell": 8 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let after: serde_json::Value = test::read_body_json(resp).await;
    assert!(after["cells"][8].is_null());
    assert_eq!(after["winner"], "X");

    // Reset clears the board and X moves first again.
    let req = test::TestRequest::post()
        .uri(&format!("/dashboard/tic-tac-toe/sessions/{id}/reset"))
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let fresh: serde_json::Value = test::read_body_json(resp).await;
    assert!(fresh["winner"].is_null());
    assert_eq!(fresh["next_player"], "X");
    assert!(fresh["cells"].as_array().expect("cells").iter().all(|c| c.is_null()));
}

#[actix_web::test]
async fn unknown_sessions_render_not_found() {
    let data = web::Data::new(test_state());
    let cookie = session_cookie(&data);
    let app = test::init_service(
        App::new().app_data(data.clone()).service(
            web::scope("/dashboard")
                .wrap(SessionGuard)
                .configure(routes::dashboard_scope),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/dashboard/tic-tac-toe/sessions/01ARZ3NDEKTSV4RRFFQ69G5FAV")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "BOARD_SESSION_NOT_FOUND");
}
