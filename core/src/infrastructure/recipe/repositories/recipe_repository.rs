use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    Select, TransactionTrait, sea_query::Expr,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::{
    domain::{
        common::{entities::app_errors::CoreError, generate_timestamp},
        recipe::{
            entities::{
                GeneratedRecipe, InteractionAction, InteractionCounts, InteractionKind,
                RecipeRequest,
            },
            ports::RecipeRepository,
        },
    },
    entity::{
        generated_recipes::{Column, Entity},
        recipe_interactions::{
            ActiveModel as InteractionActiveModel, Column as InteractionColumn,
            Entity as InteractionEntity,
        },
        recipe_requests::Entity as RequestEntity,
    },
    infrastructure::recipe::mappers::{recipe_active_model, request_active_model},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn counter_column(kind: InteractionKind) -> Column {
    match kind {
        InteractionKind::Like => Column::LikeCount,
        InteractionKind::Favorite => Column::FavoriteCount,
    }
}

/// Recipe row locked for the rest of the transaction. Interaction toggles on
/// one recipe queue behind this lock.
fn locked_recipe(recipe_id: Uuid) -> Select<Entity> {
    Entity::find_by_id(recipe_id).lock_exclusive()
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_request(
        &self,
        request: RecipeRequest,
        recipes: Vec<GeneratedRecipe>,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let recipe_models = recipes
            .iter()
            .map(recipe_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        RequestEntity::insert(request_active_model(&request))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create recipe request: {}", e);
                CoreError::InternalServerError
            })?;

        if !recipe_models.is_empty() {
            Entity::insert_many(recipe_models)
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create generated recipes: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe request: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(recipes)
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Option<GeneratedRecipe>, CoreError> {
        let recipe = Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get generated recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipe.map(GeneratedRecipe::from))
    }

    async fn record_interaction(
        &self,
        recipe_id: Uuid,
        customer_id: &str,
        kind: InteractionKind,
        action: InteractionAction,
    ) -> Result<InteractionCounts, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        locked_recipe(recipe_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to lock generated recipe: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        let existing = InteractionEntity::find()
            .filter(InteractionColumn::RecipeId.eq(recipe_id))
            .filter(InteractionColumn::CustomerId.eq(customer_id))
            .filter(InteractionColumn::Kind.eq(kind.as_str()))
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to find recipe interaction: {}", e);
                CoreError::InternalServerError
            })?;

        let counter = counter_column(kind);

        match (action, existing) {
            (InteractionAction::Add, None) => {
                let (now, timestamp) = generate_timestamp();
                InteractionEntity::insert(InteractionActiveModel {
                    id: Set(Uuid::new_v7(timestamp)),
                    recipe_id: Set(recipe_id),
                    customer_id: Set(customer_id.to_string()),
                    kind: Set(kind.as_str().to_string()),
                    created_at: Set(now.fixed_offset()),
                })
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create recipe interaction: {}", e);
                    CoreError::InternalServerError
                })?;

                Entity::update_many()
                    .col_expr(counter, Expr::col(counter).add(1))
                    .filter(Column::Id.eq(recipe_id))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        error!("Failed to increment {} count: {}", kind.as_str(), e);
                        CoreError::InternalServerError
                    })?;
            }
            (InteractionAction::Remove, Some(interaction)) => {
                InteractionEntity::delete_by_id(interaction.id)
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        error!("Failed to delete recipe interaction: {}", e);
                        CoreError::InternalServerError
                    })?;

                Entity::update_many()
                    .col_expr(counter, Expr::col(counter).sub(1))
                    .filter(Column::Id.eq(recipe_id))
                    .filter(counter.gt(0))
                    .exec(&txn)
                    .await
                    .map_err(|e| {
                        error!("Failed to decrement {} count: {}", kind.as_str(), e);
                        CoreError::InternalServerError
                    })?;
            }
            _ => {
                debug!(%recipe_id, kind = kind.as_str(), "interaction already in requested state");
            }
        }

        let recipe = Entity::find_by_id(recipe_id)
            .one(&txn)
            .await
            .map_err(|e| {
                error!("Failed to reload generated recipe: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit recipe interaction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(InteractionCounts {
            like_count: recipe.like_count,
            favorite_count: recipe.favorite_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    #[test]
    fn test_interaction_toggle_locks_recipe_row() {
        let sql = locked_recipe(Uuid::nil())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"FROM "generated_recipes""#), "{sql}");
        assert!(sql.contains("FOR UPDATE"), "{sql}");
    }
}
