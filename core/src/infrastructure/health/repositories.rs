use std::time::Instant;

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    },
    entity::japanese_foods::Entity as FoodEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::DatabaseUnavailable(e.to_string())
        })?;

        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let start = Instant::now();

        let status = match FoodEntity::find().count(&self.db).await {
            Ok(food_records) => DatabaseHealthStatus {
                is_healthy: true,
                response_time_ms: start.elapsed().as_millis() as u64,
                food_records,
                error: None,
            },
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                DatabaseHealthStatus {
                    is_healthy: false,
                    response_time_ms: start.elapsed().as_millis() as u64,
                    food_records: 0,
                    error: Some(e.to_string()),
                }
            }
        };

        Ok(status)
    }
}
