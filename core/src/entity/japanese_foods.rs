use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "japanese_foods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub food_code: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub name_kana: Option<String>,
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub search_text: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub energy_kcal: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub protein: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub fat: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub carbs: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub sodium: Option<f64>,
    pub is_proprietary: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
