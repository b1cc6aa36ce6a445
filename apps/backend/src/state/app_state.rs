use std::sync::Arc;

use dashmap::DashMap;
use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::provider::IdentityProvider;
use crate::cache::views::ViewCache;
use crate::domain::board::BoardState;

/// Live tic-tac-toe boards, one per interactive session.
pub type BoardSessions = DashMap<String, BoardState>;

/// Application state containing shared resources
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cached renderings of the dashboard views
    pub views: ViewCache,
    /// In-memory board-game sessions
    pub boards: BoardSessions,
    /// External identity provider for the login flow
    pub identity: Arc<dyn IdentityProvider>,
    /// Security configuration including session-token settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityProvider>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            db,
            views: ViewCache::new(),
            boards: DashMap::new(),
            identity,
            security,
        }
    }
}
