use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        common::{KojilabConfig, services::Service},
        ingredient_alias::entities::AliasTable,
        seasoning::services::SeasoningEstimator,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        food::repositories::PostgresFoodRepository,
        health::repositories::PostgresHealthCheckRepository,
        llm::AzureOpenAIClient,
        nutrition::repositories::PostgresNutritionStandardRepository,
        recipe::repositories::PostgresRecipeRepository,
    },
};

pub type KojilabService = Service<
    PostgresFoodRepository,
    PostgresNutritionStandardRepository,
    PostgresRecipeRepository,
    AzureOpenAIClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: KojilabConfig) -> Result<KojilabService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig::new(config.database.url())).await?;
    let db = postgres.get_db();

    let alias_table = match &config.nutrition.alias_table_path {
        Some(path) => AliasTable::from_file(path)?,
        None => AliasTable::builtin(),
    };
    info!(
        aliases = alias_table.len(),
        search_limit = config.nutrition.search_limit,
        rice_koji_policy = ?config.nutrition.rice_koji_policy,
        "nutrition engine configured"
    );

    Ok(Service::new(
        PostgresFoodRepository::new(db.clone()),
        PostgresNutritionStandardRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        AzureOpenAIClient::new(
            config.llm.azure_openai_endpoint,
            config.llm.azure_openai_api_key,
            config.llm.max_tokens,
        ),
        PostgresHealthCheckRepository::new(db),
        Arc::new(alias_table),
        config.nutrition.search_limit,
        SeasoningEstimator::new(config.nutrition.rice_koji_policy),
    ))
}
