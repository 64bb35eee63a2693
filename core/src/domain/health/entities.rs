use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub is_healthy: bool,
    pub response_time_ms: u64,
    /// Rows in the food table; zero usually means the import was never run.
    pub food_records: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
