//! In-process port implementations shared by the service tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, services::Service},
        food::{entities::FoodRecord, ports::FoodRepository},
        health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
        ingredient_alias::entities::AliasTable,
        nutrition::{
            ports::NutritionStandardRepository,
            standards::{NutritionStandard, Sex, fixtures},
        },
        recipe::{
            entities::{
                GeneratedRecipe, InteractionAction, InteractionCounts, InteractionKind,
                RecipeRequest,
            },
            ports::{LLMClient, RecipeRepository},
        },
        seasoning::services::SeasoningEstimator,
    },
    infrastructure::food::repositories::InMemoryFoodRepository,
};

pub const SAMPLE_LLM_RESPONSE: &str = r#"{
  "recipes": [
    {
      "name": "鮭の塩麹焼き",
      "ingredients": [
        {"item": "鮭", "amount": 100, "unit": "g"},
        {"item": "MUROの塩麹", "amount": 15, "unit": "g"}
      ],
      "steps": [
        {"step_number": 1, "description": "鮭に塩麹を塗り30分置く"},
        {"step_number": 2, "description": "魚焼きグリルで焼く"}
      ],
      "benefit": "塩麹の旨味で塩分を抑えられます"
    },
    {
      "name": "豚バラとキャベツの醤油麹炒め",
      "ingredients": [
        {"item": "豚バラ肉", "amount": 120, "unit": "g"},
        {"item": "キャベツ", "amount": 150, "unit": "g"},
        {"item": "醤油麹", "amount": "10", "unit": "g"}
      ],
      "steps": ["豚肉を炒める", "キャベツと醤油麹を加える"],
      "benefit": "たんぱく質と食物繊維がとれます"
    },
    {
      "name": "キャベツの浅漬け",
      "ingredients": ["キャベツ 200g", "塩麹 大さじ1"],
      "steps": "キャベツを切る\n塩麹で和える",
      "benefit": "作り置きできます"
    }
  ]
}"#;

pub fn food_fixture() -> InMemoryFoodRepository {
    let mut salt_koji = FoodRecord::new("MUROの塩麹")
        .with_search_text("MUROの塩麹 塩麹 塩こうじ")
        .proprietary();
    salt_koji.sodium = Some(11600.0);

    let mut soy_koji = FoodRecord::new("MUROの醤油麹")
        .with_search_text("MUROの醤油麹 醤油麹 しょうゆこうじ")
        .proprietary();
    soy_koji.sodium = Some(2440.0);

    InMemoryFoodRepository::new(vec![
        FoodRecord::new("さけ 生").with_nutrients(133.0, 22.3, 4.1, 0.0, 66.0),
        FoodRecord::new("豚肉 ばら").with_nutrients(366.0, 14.4, 35.4, 0.1, 50.0),
        FoodRecord::new("キャベツ 生").with_nutrients(21.0, 1.3, 0.2, 5.2, 5.0),
        salt_koji,
        soy_koji,
    ])
}

pub struct UnavailableFoodRepository;

impl FoodRepository for UnavailableFoodRepository {
    async fn find_by_name(&self, _name: &str) -> Result<Option<FoodRecord>, CoreError> {
        Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
    }

    async fn search_by_keyword(
        &self,
        _keyword: &str,
        _limit: u64,
    ) -> Result<Vec<FoodRecord>, CoreError> {
        Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
    }

    async fn find_first_by_prefix(&self, _prefix: &str) -> Result<Option<FoodRecord>, CoreError> {
        Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
    }
}

pub struct InMemoryNutritionStandardRepository {
    standards: Vec<NutritionStandard>,
}

impl InMemoryNutritionStandardRepository {
    pub fn new(standards: Vec<NutritionStandard>) -> Self {
        Self { standards }
    }
}

impl NutritionStandardRepository for InMemoryNutritionStandardRepository {
    async fn find_by_sex_and_age(
        &self,
        sex: Sex,
        age: i32,
    ) -> Result<Option<NutritionStandard>, CoreError> {
        Ok(self
            .standards
            .iter()
            .find(|s| s.sex == sex && s.covers(age))
            .cloned())
    }
}

#[derive(Default)]
struct RecipeStore {
    requests: Vec<RecipeRequest>,
    recipes: HashMap<Uuid, GeneratedRecipe>,
    interactions: HashSet<(Uuid, String, InteractionKind)>,
}

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    store: Mutex<RecipeStore>,
}

impl InMemoryRecipeRepository {
    pub fn request_count(&self) -> usize {
        self.store.lock().unwrap().requests.len()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn create_request(
        &self,
        request: RecipeRequest,
        recipes: Vec<GeneratedRecipe>,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let mut store = self.store.lock().unwrap();
        store.requests.push(request);
        for recipe in &recipes {
            store.recipes.insert(recipe.id, recipe.clone());
        }
        Ok(recipes)
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<GeneratedRecipe>, CoreError> {
        Ok(self.store.lock().unwrap().recipes.get(&recipe_id).cloned())
    }

    async fn record_interaction(
        &self,
        recipe_id: Uuid,
        customer_id: &str,
        kind: InteractionKind,
        action: InteractionAction,
    ) -> Result<InteractionCounts, CoreError> {
        let mut store = self.store.lock().unwrap();
        let key = (recipe_id, customer_id.to_string(), kind);
        let delta = match action {
            InteractionAction::Add => i32::from(store.interactions.insert(key)),
            InteractionAction::Remove => -i32::from(store.interactions.remove(&key)),
        };

        let recipe = store.recipes.get_mut(&recipe_id).ok_or(CoreError::NotFound)?;
        let counter = match kind {
            InteractionKind::Like => &mut recipe.like_count,
            InteractionKind::Favorite => &mut recipe.favorite_count,
        };
        *counter = (*counter + delta).max(0);

        Ok(recipe.counts())
    }
}

pub struct FailingRecipeRepository;

impl RecipeRepository for FailingRecipeRepository {
    async fn create_request(
        &self,
        _request: RecipeRequest,
        _recipes: Vec<GeneratedRecipe>,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        Err(CoreError::InternalServerError)
    }

    async fn get_recipe(&self, _recipe_id: Uuid) -> Result<Option<GeneratedRecipe>, CoreError> {
        Err(CoreError::InternalServerError)
    }

    async fn record_interaction(
        &self,
        _recipe_id: Uuid,
        _customer_id: &str,
        _kind: InteractionKind,
        _action: InteractionAction,
    ) -> Result<InteractionCounts, CoreError> {
        Err(CoreError::InternalServerError)
    }
}

pub struct StaticLLMClient {
    response: Result<String, CoreError>,
}

impl StaticLLMClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: Err(CoreError::ExternalServiceError("503 Service Unavailable".to_string())),
        }
    }
}

impl LLMClient for StaticLLMClient {
    async fn generate_recipes(
        &self,
        _system_prompt: String,
        _user_message: String,
    ) -> Result<String, CoreError> {
        self.response.clone()
    }
}

pub struct StaticHealthCheckRepository;

impl HealthCheckRepository for StaticHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            is_healthy: true,
            response_time_ms: 1,
            food_records: food_fixture().len() as u64,
            error: None,
        })
    }
}

pub type TestService<F, RR, LLM> =
    Service<F, InMemoryNutritionStandardRepository, RR, LLM, StaticHealthCheckRepository>;

fn build<F, RR, LLM>(food_repository: F, recipe_repository: RR, llm_client: LLM) -> TestService<F, RR, LLM>
where
    F: FoodRepository,
    RR: RecipeRepository,
    LLM: LLMClient,
{
    Service::new(
        food_repository,
        InMemoryNutritionStandardRepository::new(vec![
            fixtures::adult_male(),
            fixtures::teenage_female(),
        ]),
        recipe_repository,
        llm_client,
        StaticHealthCheckRepository,
        Arc::new(AliasTable::builtin()),
        crate::domain::food::services::DEFAULT_SEARCH_LIMIT,
        SeasoningEstimator::default(),
    )
}

pub fn service_with<RR, LLM>(recipe_repository: RR, llm_client: LLM) -> TestService<InMemoryFoodRepository, RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    build(food_fixture(), recipe_repository, llm_client)
}

pub fn service_with_food<F>(
    food_repository: F,
) -> TestService<F, InMemoryRecipeRepository, StaticLLMClient>
where
    F: FoodRepository,
{
    build(
        food_repository,
        InMemoryRecipeRepository::default(),
        StaticLLMClient::new(SAMPLE_LLM_RESPONSE),
    )
}

pub fn test_service() -> TestService<InMemoryFoodRepository, InMemoryRecipeRepository, StaticLLMClient> {
    service_with_food(food_fixture())
}
