use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food::ports::FoodRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    nutrition::ports::NutritionStandardRepository,
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<F, NS, RR, LLM, HC> HealthCheckService for Service<F, NS, RR, LLM, HC>
where
    F: FoodRepository,
    NS: NutritionStandardRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fakes::test_service;

    #[tokio::test]
    async fn test_readiness_reports_repository_status() {
        let status = test_service().readness().await.unwrap();

        assert!(status.is_healthy);
        assert!(status.error.is_none());
    }
}
