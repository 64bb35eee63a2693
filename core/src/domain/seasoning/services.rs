use tracing::{debug, info};

use crate::domain::{
    common::round1,
    nutrition::entities::Ingredient,
    seasoning::{
        entities::{Comparison, SeasoningMatch},
        value_objects::{KojiType, RiceKojiPolicy},
    },
};

const UMAMI_WITH_SOY: &str = "アミノ酸とグルタミン酸";
const UMAMI_DEFAULT: &str = "グルタミン酸";
const LOW_CONFIDENCE_NOTE: &str = "（※ 麹の種類が明記されていないため、レシピの他の材料から推定した値です）";

const SALT_HINTS: &[&str] = &["塩", "しお", "salt"];
const SOY_HINTS: &[&str] = &["醤油", "しょうゆ", "味噌", "みそ", "soy sauce", "miso"];
const SWEET_HINTS: &[&str] = &[
    "砂糖", "さとう", "はちみつ", "蜂蜜", "みりん", "甘酒", "メープル", "sugar", "honey",
];

/// Estimates how much sodium koji seasonings save over plain salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasoningEstimator {
    rice_koji_policy: RiceKojiPolicy,
}

impl SeasoningEstimator {
    pub fn new(rice_koji_policy: RiceKojiPolicy) -> Self {
        Self { rice_koji_policy }
    }

    pub fn rice_koji_policy(&self) -> RiceKojiPolicy {
        self.rice_koji_policy
    }

    /// Koji seasonings among `ingredients`, in input order. Ingredients
    /// without a positive amount are skipped.
    pub fn detect(&self, ingredients: &[Ingredient]) -> Vec<SeasoningMatch> {
        let mut matches = Vec::new();
        let mut bare_rice_koji = Vec::new();

        for ingredient in ingredients {
            let grams = ingredient.grams();
            if grams <= 0.0 {
                continue;
            }

            if let Some(koji_type) = KojiType::detect(&ingredient.item) {
                matches.push(SeasoningMatch {
                    ingredient: ingredient.item.clone(),
                    koji_type,
                    grams,
                    inferred: false,
                });
            } else if KojiType::RiceKoji.is_named_in(&ingredient.item) {
                bare_rice_koji.push((matches.len(), ingredient, grams));
            }
        }

        if bare_rice_koji.is_empty() {
            return matches;
        }

        match self.rice_koji_policy {
            RiceKojiPolicy::RequireExplicit => {
                debug!(
                    count = bare_rice_koji.len(),
                    "ignoring rice koji without a stated seasoning type"
                );
            }
            RiceKojiPolicy::InferFromContext => {
                let inferred = infer_from_context(ingredients);
                // Insert back at the original positions, last first.
                for (position, ingredient, grams) in bare_rice_koji.into_iter().rev() {
                    debug!(
                        ingredient = %ingredient.item,
                        inferred = inferred.label(),
                        "inferred rice koji seasoning type"
                    );
                    matches.insert(
                        position,
                        SeasoningMatch {
                            ingredient: ingredient.item.clone(),
                            koji_type: inferred,
                            grams,
                            inferred: true,
                        },
                    );
                }
            }
        }

        matches
    }

    pub fn estimate_reduction(&self, ingredients: &[Ingredient]) -> Comparison {
        let matches = self.detect(ingredients);
        if matches.is_empty() {
            return Comparison::none();
        }

        let koji_sodium: f64 = matches.iter().map(SeasoningMatch::koji_sodium_mg).sum();
        let traditional_sodium: f64 = matches
            .iter()
            .map(SeasoningMatch::traditional_sodium_mg)
            .sum();

        if traditional_sodium <= 0.0 {
            return Comparison::none();
        }

        let reduction = (traditional_sodium - koji_sodium) / traditional_sodium * 100.0;
        let low_confidence = matches.iter().any(|m| m.inferred);

        let mut labels: Vec<&str> = Vec::new();
        for m in &matches {
            let label = m.koji_type.label();
            if !labels.contains(&label) {
                labels.push(label);
            }
        }

        let umami = if matches.iter().any(|m| m.koji_type == KojiType::SoyKoji) {
            UMAMI_WITH_SOY
        } else {
            UMAMI_DEFAULT
        };

        let mut koji_effect = format!(
            "{}の旨味成分（{}）により、塩分を{}%削減しながら同等の塩味を実現。麹の100種の酵素が生み出す甘味・うま味・こく味で満足感が得られ、高血圧予防に貢献します。",
            labels.join("、"),
            umami,
            reduction.round()
        );
        if low_confidence {
            koji_effect.push_str(LOW_CONFIDENCE_NOTE);
        }

        info!(
            seasonings = ?labels,
            koji_sodium = koji_sodium.round(),
            traditional_sodium = traditional_sodium.round(),
            reduction = round1(reduction),
            low_confidence,
            "salt reduction estimated"
        );

        Comparison {
            traditional_sodium: traditional_sodium.round(),
            sodium_reduction: round1(reduction),
            koji_effect,
            low_confidence,
        }
    }
}

fn mentions_any(ingredients: &[Ingredient], hints: &[&str]) -> bool {
    ingredients.iter().any(|ingredient| {
        let name = ingredient.item.to_lowercase();
        KojiType::detect(&ingredient.item).is_none()
            && !KojiType::RiceKoji.is_named_in(&ingredient.item)
            && hints.iter().any(|hint| name.contains(hint))
    })
}

fn infer_from_context(ingredients: &[Ingredient]) -> KojiType {
    if mentions_any(ingredients, SALT_HINTS) {
        KojiType::SaltKoji
    } else if mentions_any(ingredients, SOY_HINTS) {
        KojiType::SoyKoji
    } else if mentions_any(ingredients, SWEET_HINTS) {
        KojiType::RiceKoji
    } else {
        KojiType::SaltKoji
    }
}
