use crate::dto::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};
use tracing::debug;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        processors: state
            .validator
            .active_processors()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
