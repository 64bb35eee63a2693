use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub shop: String,
    pub customer_id: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub condition: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub needs: Option<String>,
    pub koji_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_ingredients: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::generated_recipes::Entity")]
    GeneratedRecipes,
}

impl Related<super::generated_recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeneratedRecipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
