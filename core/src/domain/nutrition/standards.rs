use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_STANDARD_SEX: Sex = Sex::Male;
pub const DEFAULT_STANDARD_AGE: i32 = 30;
pub const SUPPORTED_AGES: std::ops::RangeInclusive<i32> = 3..=99;

pub const NOTE_MATCHED: &str = "厚生労働省「日本人の食事摂取基準（2025年版）」に基づく推奨値";
pub const NOTE_OUT_OF_RANGE: &str =
    "※ 推奨値は3歳～75歳を対象としています。範囲外のため一般的な推奨値を表示しています。";
pub const NOTE_UNSET: &str = "※ 性別・年齢が未設定のため、一般的な推奨値を表示しています。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Accepts the Japanese and English spellings shoppers enter in their
    /// profile.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "男性" | "男" | "male" | "m" => Some(Sex::Male),
            "女性" | "女" | "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Daily reference intake for one sex and age band. Percentages are shares of
/// total energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionStandard {
    pub sex: Sex,
    pub age_range: String,
    pub age_min: i32,
    pub age_max: i32,
    pub energy_moderate: Option<f64>,
    pub protein_recommended: Option<f64>,
    pub protein_target_min: Option<f64>,
    pub protein_target_max: Option<f64>,
    pub fat_target_min: Option<f64>,
    pub fat_target_max: Option<f64>,
    pub carbohydrate_min: Option<f64>,
    pub carbohydrate_max: Option<f64>,
    pub fiber_target: Option<f64>,
    pub sodium_target: Option<f64>,
}

impl NutritionStandard {
    pub fn covers(&self, age: i32) -> bool {
        self.age_min <= age && age <= self.age_max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionStandardResult {
    pub standard: NutritionStandard,
    /// The shopper's profile could not be used and the adult male figures
    /// were returned instead.
    pub is_default: bool,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TargetRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<f64>,
    pub target_min: Option<f64>,
    pub target_max: Option<f64>,
}

/// Gram targets for a recipe of a given energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PfcRecommendations {
    pub protein: TargetRange,
    pub fat: TargetRange,
    pub carbohydrate: TargetRange,
    pub fiber_target: Option<f64>,
    pub sodium_target: Option<f64>,
}

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;

fn grams_for_share(total_calories: f64, percent: Option<f64>, kcal_per_gram: f64) -> Option<f64> {
    percent
        .filter(|p| *p > 0.0)
        .map(|p| (total_calories * p / 100.0 / kcal_per_gram).round())
}

impl PfcRecommendations {
    pub fn from_standard(standard: &NutritionStandard, total_calories: f64) -> Self {
        Self {
            protein: TargetRange {
                recommended: standard.protein_recommended,
                target_min: grams_for_share(
                    total_calories,
                    standard.protein_target_min,
                    KCAL_PER_GRAM_PROTEIN,
                ),
                target_max: grams_for_share(
                    total_calories,
                    standard.protein_target_max,
                    KCAL_PER_GRAM_PROTEIN,
                ),
            },
            fat: TargetRange {
                recommended: None,
                target_min: grams_for_share(total_calories, standard.fat_target_min, KCAL_PER_GRAM_FAT),
                target_max: grams_for_share(total_calories, standard.fat_target_max, KCAL_PER_GRAM_FAT),
            },
            carbohydrate: TargetRange {
                recommended: None,
                target_min: grams_for_share(
                    total_calories,
                    standard.carbohydrate_min,
                    KCAL_PER_GRAM_CARBOHYDRATE,
                ),
                target_max: grams_for_share(
                    total_calories,
                    standard.carbohydrate_max,
                    KCAL_PER_GRAM_CARBOHYDRATE,
                ),
            },
            fiber_target: standard.fiber_target,
            sodium_target: standard.sodium_target,
        }
    }
}
