use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::seasoning::value_objects::KojiType;

/// Sodium of a koji-seasoned recipe against the same recipe salted
/// traditionally. All zero with an empty explanation when no koji seasoning
/// is present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// mg of sodium the replaced table salt would contribute.
    pub traditional_sodium: f64,
    /// Percent, one decimal.
    pub sodium_reduction: f64,
    pub koji_effect: String,
    /// The seasoning type was inferred rather than stated.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub low_confidence: bool,
}

impl Comparison {
    pub fn none() -> Self {
        Self::default()
    }
}

/// One ingredient recognised as a koji seasoning.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasoningMatch {
    pub ingredient: String,
    pub koji_type: KojiType,
    pub grams: f64,
    pub inferred: bool,
}

impl SeasoningMatch {
    pub fn koji_sodium_mg(&self) -> f64 {
        super::value_objects::sodium_mg_from_salt(
            self.grams * self.koji_type.salt_concentration() / 100.0,
        )
    }

    pub fn traditional_sodium_mg(&self) -> f64 {
        super::value_objects::sodium_mg_from_salt(
            self.grams * super::value_objects::SALT_EQUIVALENT_PER_GRAM,
        )
    }
}
