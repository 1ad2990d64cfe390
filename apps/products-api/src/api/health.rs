//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

async fn ready_handler(State(state): State<AppState>) -> Response {
    let database: HealthCheckFuture = Box::pin(async {
        check_health(&state.db).await.map_err(|e| e.to_string())
    });

    run_health_checks(vec![("database", database)]).await
}

/// `GET /ready`: 200 when PostgreSQL answers a ping, 503 otherwise
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}
