use sea_orm::entity::prelude::*;

/// One customer's like or favorite. The repository keeps at most one row per
/// `(recipe_id, customer_id, kind)` by locking the recipe row while toggling.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_interactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub customer_id: String,
    pub kind: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::generated_recipes::Entity",
        from = "Column::RecipeId",
        to = "super::generated_recipes::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    GeneratedRecipes,
}

impl Related<super::generated_recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeneratedRecipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
