use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "nutrition_standards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub sex: String,
    pub age_range: String,
    pub age_min: i32,
    pub age_max: i32,
    #[sea_orm(column_type = "Double", nullable)]
    pub energy_moderate: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub protein_recommended: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub protein_target_min: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub protein_target_max: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub fat_target_min: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub fat_target_max: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub carbohydrate_min: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub carbohydrate_max: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub fiber_target: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub sodium_target: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
