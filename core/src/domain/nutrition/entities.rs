use std::ops::AddAssign;

use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use utoipa::ToSchema;

use crate::domain::{common::round1, food::entities::FoodRecord};

/// One line of an LLM recipe. `amount` is read as grams.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(from = "IngredientRepr")]
pub struct Ingredient {
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, amount: f64) -> Self {
        Self {
            item: item.into(),
            amount: Some(amount),
            unit: Some("g".to_string()),
        }
    }

    /// Gram-equivalent multiplier; missing, negative or non-finite amounts
    /// count as zero.
    pub fn grams(&self) -> f64 {
        self.amount
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .unwrap_or(0.0)
    }
}

/// LLMs emit ingredients either as bare strings or as objects, with amounts
/// as numbers or numeric strings. Fields of any other type read as missing
/// and any other element reads as an empty ingredient.
#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientRepr {
    Text(String),
    Structured {
        #[serde(default, deserialize_with = "deserialize_text")]
        item: Option<String>,
        #[serde(default, deserialize_with = "deserialize_amount")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "deserialize_text")]
        unit: Option<String>,
    },
    Other(IgnoredAny),
}

impl From<IngredientRepr> for Ingredient {
    fn from(repr: IngredientRepr) -> Self {
        match repr {
            IngredientRepr::Text(item) => Self {
                item,
                amount: None,
                unit: None,
            },
            IngredientRepr::Structured { item, amount, unit } => Self {
                item: item.unwrap_or_default(),
                amount,
                unit,
            },
            IngredientRepr::Other(_) => Self::default(),
        }
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Amount>::deserialize(deserializer)? {
        Some(Amount::Number(value)) => Some(value),
        Some(Amount::Text(text)) => text.trim().parse::<f64>().ok(),
        Some(Amount::Other(_)) | None => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Text(String),
        Number(f64),
        Other(IgnoredAny),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Text(text)) => Some(text),
        Some(Text::Number(value)) => Some(value.to_string()),
        Some(Text::Other(_)) | None => None,
    })
}

/// Recipe-level totals. Protein, fat and carbs carry one decimal; sodium (mg)
/// and calories (kcal) are whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionSummary {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: f64,
    pub calories: f64,
}

impl NutritionSummary {
    /// Salt-equivalent grams for the summed sodium.
    pub fn salt_equivalent(&self) -> f64 {
        round1(self.sodium / 1000.0 * crate::domain::seasoning::SODIUM_TO_SALT_FACTOR)
    }
}

/// Unrounded running totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NutrientTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sodium: f64,
    pub calories: f64,
}

impl NutrientTotals {
    /// What `grams` of `record` adds, given per-100 g figures.
    pub fn contribution(record: &FoodRecord, grams: f64) -> Self {
        let factor = grams / 100.0;

        Self {
            protein: record.protein.unwrap_or(0.0) * factor,
            fat: record.fat.unwrap_or(0.0) * factor,
            carbs: record.carbs.unwrap_or(0.0) * factor,
            sodium: record.sodium.unwrap_or(0.0) * factor,
            calories: record.energy_kcal.unwrap_or(0.0) * factor,
        }
    }

    pub fn round(&self) -> NutritionSummary {
        NutritionSummary {
            protein: round1(self.protein),
            fat: round1(self.fat),
            carbs: round1(self.carbs),
            sodium: self.sodium.round(),
            calories: self.calories.round(),
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, other: Self) {
        self.protein += other.protein;
        self.fat += other.fat;
        self.carbs += other.carbs;
        self.sodium += other.sodium;
        self.calories += other.calories;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_accepts_llm_shapes() {
        let ingredients: Vec<Ingredient> = serde_json::from_str(
            r#"[
                "塩麹 大さじ1",
                {"item": "鮭", "amount": 100, "unit": "g"},
                {"item": "キャベツ", "amount": "150"},
                {"item": "ごま", "amount": "少々"},
                {"amount": 10}
            ]"#,
        )
        .unwrap();

        assert_eq!(ingredients[0].item, "塩麹 大さじ1");
        assert_eq!(ingredients[0].amount, None);
        assert_eq!(ingredients[1].amount, Some(100.0));
        assert_eq!(ingredients[1].unit.as_deref(), Some("g"));
        assert_eq!(ingredients[2].amount, Some(150.0));
        assert_eq!(ingredients[3].amount, None);
        assert_eq!(ingredients[4].item, "");
    }

    #[test]
    fn test_null_or_mistyped_fields_do_not_reject_the_list() {
        let ingredients: Vec<Ingredient> = serde_json::from_str(
            r#"[
                {"item": null, "amount": 5},
                {"item": "鮭", "amount": 100, "unit": null},
                {"item": ["味噌"], "amount": true, "unit": 3},
                null,
                42
            ]"#,
        )
        .unwrap();

        assert_eq!(ingredients.len(), 5);
        assert_eq!(ingredients[0].item, "");
        assert_eq!(ingredients[0].amount, Some(5.0));
        assert_eq!(ingredients[1].item, "鮭");
        assert_eq!(ingredients[1].unit, None);
        assert_eq!(ingredients[2].item, "");
        assert_eq!(ingredients[2].amount, None);
        assert_eq!(ingredients[2].unit.as_deref(), Some("3"));
        assert_eq!(ingredients[3], Ingredient::default());
        assert_eq!(ingredients[4], Ingredient::default());
    }

    #[test]
    fn test_malformed_amounts_count_as_zero() {
        let mut ingredient = Ingredient::new("鮭", -5.0);
        assert_eq!(ingredient.grams(), 0.0);

        ingredient.amount = Some(f64::NAN);
        assert_eq!(ingredient.grams(), 0.0);

        ingredient.amount = None;
        assert_eq!(ingredient.grams(), 0.0);

        ingredient.amount = Some(42.5);
        assert_eq!(ingredient.grams(), 42.5);
    }

    #[test]
    fn test_contribution_is_zero_for_zero_amount() {
        let record = FoodRecord::new("さけ 生").with_nutrients(133.0, 22.3, 4.1, 0.0, 66.0);
        assert_eq!(
            NutrientTotals::contribution(&record, 0.0),
            NutrientTotals::default()
        );
    }

    #[test]
    fn test_contribution_scales_linearly() {
        let record = FoodRecord::new("豚肉 ばら").with_nutrients(366.0, 14.4, 35.4, 0.1, 50.0);
        let base = NutrientTotals::contribution(&record, 80.0);
        let doubled = NutrientTotals::contribution(&record, 160.0);

        assert_eq!(doubled.protein, base.protein * 2.0);
        assert_eq!(doubled.fat, base.fat * 2.0);
        assert_eq!(doubled.carbs, base.carbs * 2.0);
        assert_eq!(doubled.sodium, base.sodium * 2.0);
        assert_eq!(doubled.calories, base.calories * 2.0);
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let mut record = FoodRecord::new("謎の食材");
        record.sodium = Some(500.0);

        let totals = NutrientTotals::contribution(&record, 50.0);

        assert_eq!(totals.sodium, 250.0);
        assert_eq!(totals.protein, 0.0);
        assert_eq!(totals.calories, 0.0);
    }

    #[test]
    fn test_round_uses_one_decimal_for_macros() {
        let totals = NutrientTotals {
            protein: 22.349,
            fat: 4.15,
            carbs: 0.04,
            sodium: 1805.5,
            calories: 132.4,
        };

        let summary = totals.round();

        assert_eq!(summary.protein, 22.3);
        assert_eq!(summary.carbs, 0.0);
        assert_eq!(summary.sodium, 1806.0);
        assert_eq!(summary.calories, 132.0);
    }
}
