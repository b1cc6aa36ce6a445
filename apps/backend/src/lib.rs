#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod actions;
pub mod adapters;
pub mod auth;
pub mod cache;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod forms;
pub mod health;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use actions::ActionOutcome;
pub use auth::jwt::{mint_session_token, verify_session_token, Claims};
pub use cache::views::ViewCache;
pub use config::db::{db_url, DbProfile};
pub use error::AppError;
pub use errors::DomainError;
pub use forms::{FieldErrors, FormPayload};
pub use infra::db::connect_db;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::session_guard::SessionGuard;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
