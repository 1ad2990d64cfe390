//! Application state management

use sea_orm::DatabaseConnection;

/// Shared application state
///
/// `db` may be a lazy pool that has never reached PostgreSQL; store calls
/// then fail with 500 until it becomes reachable.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
