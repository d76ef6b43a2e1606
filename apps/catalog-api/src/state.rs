//! Shared application state.

/// Cloned into the readiness handler and the shutdown cleanup
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
