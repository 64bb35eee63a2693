use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "generated_recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub steps: Json,
    #[sea_orm(column_type = "Text")]
    pub benefit: String,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub nutrition: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub comparison: Option<Json>,
    pub like_count: i32,
    pub favorite_count: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipe_requests::Entity",
        from = "Column::RequestId",
        to = "super::recipe_requests::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RecipeRequests,
    #[sea_orm(has_many = "super::recipe_interactions::Entity")]
    RecipeInteractions,
}

impl Related<super::recipe_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeRequests.def()
    }
}

impl Related<super::recipe_interactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeInteractions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
