use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Nutrition-database row. Nutrient values are per 100 g; `None` means the
/// source table has no figure and contributes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecord {
    #[serde(default = "generate_uuid_v7")]
    pub id: Uuid,
    #[serde(default)]
    pub food_code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub name_kana: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub search_text: Option<String>,
    #[serde(default)]
    pub energy_kcal: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub sodium: Option<f64>,
    /// Part of the seasoning vendor's own product line.
    #[serde(default)]
    pub is_proprietary: bool,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            id: generate_uuid_v7(),
            food_code: None,
            search_text: Some(name.clone()),
            name,
            name_kana: None,
            category: None,
            energy_kcal: None,
            protein: None,
            fat: None,
            carbs: None,
            sodium: None,
            is_proprietary: false,
        }
    }

    pub fn with_nutrients(
        mut self,
        energy_kcal: f64,
        protein: f64,
        fat: f64,
        carbs: f64,
        sodium: f64,
    ) -> Self {
        self.energy_kcal = Some(energy_kcal);
        self.protein = Some(protein);
        self.fat = Some(fat);
        self.carbs = Some(carbs);
        self.sodium = Some(sodium);
        self
    }

    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = Some(search_text.into());
        self
    }

    pub fn proprietary(mut self) -> Self {
        self.is_proprietary = true;
        self
    }

    /// Whether `keyword` occurs in the name or the search text.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.name.contains(keyword)
            || self
                .search_text
                .as_deref()
                .is_some_and(|text| text.contains(keyword))
    }
}

/// Which cascade stage produced a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum MatchStage {
    Exact,
    Keyword { keyword: String },
    Prefix,
}

impl MatchStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStage::Exact => "exact",
            MatchStage::Keyword { .. } => "keyword",
            MatchStage::Prefix => "prefix",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub record: FoodRecord,
    pub stage: MatchStage,
}

impl Resolution {
    /// Prefix matches are guesses and should not be trusted for display.
    pub fn is_low_confidence(&self) -> bool {
        matches!(self.stage, MatchStage::Prefix)
    }
}
