use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kojilab_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// 503 keeps the instance out of rotation while the database is down.
pub fn readiness_status(status: &DatabaseHealthStatus) -> StatusCode {
    if status.is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus)
    )
)]
pub async fn health_ready(State(state): State<AppState>) -> Result<Response, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok((readiness_status(&status), Json(status)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_database_is_unavailable() {
        let status = DatabaseHealthStatus {
            is_healthy: false,
            response_time_ms: 0,
            food_records: 0,
            error: Some("connection refused".to_string()),
        };
        assert_eq!(readiness_status(&status), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_healthy_database_is_ready() {
        let status = DatabaseHealthStatus {
            is_healthy: true,
            response_time_ms: 3,
            food_records: 2478,
            error: None,
        };
        assert_eq!(readiness_status(&status), StatusCode::OK);
    }
}
