//! Application state assembly.

use std::sync::Arc;

use crate::auth::provider::HttpIdentityProvider;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Build the production application state from environment configuration.
pub async fn build_state(security: SecurityConfig) -> Result<AppState, AppError> {
    let db = connect_db(DbProfile::Prod).await?;

    let verify_url = std::env::var("IDENTITY_VERIFY_URL").map_err(|_| {
        AppError::config("Required environment variable 'IDENTITY_VERIFY_URL' is not set".to_string())
    })?;
    let identity = Arc::new(HttpIdentityProvider::new(verify_url));

    Ok(AppState::new(db, identity, security))
}
