use super::handlers::{
    health_live::{__path_health_live, health_live},
    health_ready::{__path_health_ready, health_ready},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health/live", state.args.server.root_path),
            get(health_live),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(health_ready),
        )
}
