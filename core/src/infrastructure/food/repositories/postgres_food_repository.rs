use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{LikeExpr, SimpleExpr},
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{entities::FoodRecord, ports::FoodRepository},
    },
    entity::japanese_foods::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Wraps `text` in `%...%` with LIKE wildcards and the escape character escaped,
/// so the text matches literally.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn keyword_condition(keyword: &str) -> Condition {
    let like = |column: Column| -> SimpleExpr {
        column.like(LikeExpr::new(contains_pattern(keyword)).escape('\\'))
    };
    Condition::any()
        .add(like(Column::Name))
        .add(like(Column::SearchText))
}

impl FoodRepository for PostgresFoodRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<FoodRecord>, CoreError> {
        let food = Entity::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find food by name: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(food.map(FoodRecord::from))
    }

    async fn search_by_keyword(
        &self,
        keyword: &str,
        limit: u64,
    ) -> Result<Vec<FoodRecord>, CoreError> {
        let foods = Entity::find()
            .filter(keyword_condition(keyword))
            .order_by_desc(Column::IsProprietary)
            .order_by_asc(Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search foods by keyword: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(foods.into_iter().map(FoodRecord::from).collect())
    }

    async fn find_first_by_prefix(&self, prefix: &str) -> Result<Option<FoodRecord>, CoreError> {
        let food = Entity::find()
            .filter(Column::Name.starts_with(prefix))
            .order_by_asc(Column::Name)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to find food by prefix: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(food.map(FoodRecord::from))
    }
}
