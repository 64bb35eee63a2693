use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Grams of salt per gram of sodium.
pub const SODIUM_TO_SALT_FACTOR: f64 = 2.54;

/// Grams of table salt one gram of koji seasoning replaces in a recipe
/// (12.5 g of koji for a 5 g teaspoon of salt).
pub const SALT_EQUIVALENT_PER_GRAM: f64 = 0.4;

/// Milligrams of sodium in `salt_grams` of salt.
pub fn sodium_mg_from_salt(salt_grams: f64) -> f64 {
    salt_grams * 1000.0 / SODIUM_TO_SALT_FACTOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KojiType {
    SaltKoji,
    GarlicKoji,
    HerbKoji,
    TomatoKoji,
    SoyKoji,
    SpicyKoji,
    /// Plain rice koji; never matched by name, only inferred.
    RiceKoji,
}

impl KojiType {
    /// Specific labels first, so that "にんにく麹" is not read as the generic
    /// salt koji.
    pub const DETECTION_ORDER: [KojiType; 6] = [
        KojiType::GarlicKoji,
        KojiType::HerbKoji,
        KojiType::TomatoKoji,
        KojiType::SoyKoji,
        KojiType::SpicyKoji,
        KojiType::SaltKoji,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KojiType::SaltKoji => "塩麹",
            KojiType::GarlicKoji => "にんにく麹",
            KojiType::HerbKoji => "ハーブ麹",
            KojiType::TomatoKoji => "トマト麹",
            KojiType::SoyKoji => "醤油麹",
            KojiType::SpicyKoji => "赤辛麹",
            KojiType::RiceKoji => "米麹",
        }
    }

    /// Salt content in percent by weight.
    pub fn salt_concentration(&self) -> f64 {
        match self {
            KojiType::SaltKoji => 11.6,
            KojiType::GarlicKoji => 11.0,
            KojiType::HerbKoji => 11.6,
            KojiType::TomatoKoji => 7.2,
            KojiType::SoyKoji => 6.2,
            KojiType::SpicyKoji => 11.6,
            KojiType::RiceKoji => 0.0,
        }
    }

    fn japanese_names(&self) -> &'static [&'static str] {
        match self {
            KojiType::SaltKoji => &["塩麹", "塩こうじ", "しおこうじ", "シオコウジ", "塩糀"],
            KojiType::GarlicKoji => &["にんにく麹", "ニンニク麹", "にんにくこうじ", "ニンニクコウジ"],
            KojiType::HerbKoji => &["ハーブ麹", "ハーブこうじ", "ハーブコウジ"],
            KojiType::TomatoKoji => &["トマト麹", "トマトこうじ", "とまと麹", "トマトコウジ"],
            KojiType::SoyKoji => &[
                "醤油麹",
                "しょうゆ麹",
                "醤油こうじ",
                "しょうゆこうじ",
                "ショウユコウジ",
            ],
            KojiType::SpicyKoji => &["赤辛麹", "赤辛こうじ", "あかからこうじ", "アカカラコウジ"],
            KojiType::RiceKoji => &["米麹", "米こうじ", "こめこうじ", "コメコウジ", "米糀"],
        }
    }

    fn romanized_pattern(&self) -> &'static str {
        match self {
            KojiType::SaltKoji => r"(?i)\b(?:salt|shio)[\s\-_]*koji",
            KojiType::GarlicKoji => r"(?i)\b(?:garlic|ninniku)[\s\-_]*koji",
            KojiType::HerbKoji => r"(?i)\bherb[\s\-_]*koji",
            KojiType::TomatoKoji => r"(?i)\btomato[\s\-_]*koji",
            KojiType::SoyKoji => r"(?i)\b(?:soy(?:[\s\-_]*sauce)?|shoyu|shouyu)[\s\-_]*koji",
            KojiType::SpicyKoji => r"(?i)\b(?:spicy|akakara|red[\s\-_]*spicy)[\s\-_]*koji",
            KojiType::RiceKoji => r"(?i)\b(?:rice|kome)[\s\-_]*koji",
        }
    }

    /// Whether `name` names this seasoning in Japanese or romanized form.
    pub fn is_named_in(&self, name: &str) -> bool {
        if self.japanese_names().iter().any(|n| name.contains(n)) {
            return true;
        }

        ROMANIZED_PATTERNS
            .iter()
            .any(|(koji_type, pattern)| koji_type == self && pattern.is_match(name))
    }

    /// First type in detection order named in `name`; rice koji excluded.
    pub fn detect(name: &str) -> Option<KojiType> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|koji_type| koji_type.is_named_in(name))
    }
}

static ROMANIZED_PATTERNS: LazyLock<Vec<(KojiType, Regex)>> = LazyLock::new(|| {
    KojiType::DETECTION_ORDER
        .into_iter()
        .chain([KojiType::RiceKoji])
        .filter_map(|koji_type| {
            Regex::new(koji_type.romanized_pattern())
                .ok()
                .map(|pattern| (koji_type, pattern))
        })
        .collect()
});

/// What to do with an ingredient that only says "rice koji".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiceKojiPolicy {
    /// Ignore it; it is not counted as a seasoning.
    #[default]
    RequireExplicit,
    /// Guess the seasoning from the rest of the recipe and flag the result as
    /// low confidence.
    InferFromContext,
}

impl FromStr for RiceKojiPolicy {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "require_explicit" | "explicit" => Ok(RiceKojiPolicy::RequireExplicit),
            "infer_from_context" | "infer" => Ok(RiceKojiPolicy::InferFromContext),
            other => Err(CoreError::Configuration(format!(
                "unknown rice koji policy: {other}"
            ))),
        }
    }
}
