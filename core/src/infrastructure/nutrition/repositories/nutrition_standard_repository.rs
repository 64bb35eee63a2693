use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        nutrition::{
            ports::NutritionStandardRepository,
            standards::{NutritionStandard, Sex},
        },
    },
    entity::nutrition_standards::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresNutritionStandardRepository {
    pub db: DatabaseConnection,
}

impl PostgresNutritionStandardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl NutritionStandardRepository for PostgresNutritionStandardRepository {
    async fn find_by_sex_and_age(
        &self,
        sex: Sex,
        age: i32,
    ) -> Result<Option<NutritionStandard>, CoreError> {
        // Bands share their edge ages; the one starting latest wins.
        let standard = Entity::find()
            .filter(Column::Sex.eq(sex.as_str()))
            .filter(Column::AgeMin.lte(age))
            .filter(Column::AgeMax.gte(age))
            .order_by_desc(Column::AgeMin)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find nutrition standard: {}", e);
                CoreError::InternalServerError
            })?;

        standard.map(NutritionStandard::try_from).transpose()
    }
}
