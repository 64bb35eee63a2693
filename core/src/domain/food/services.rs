use tracing::{debug, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{
        entities::{MatchStage, Resolution},
        ports::FoodRepository,
    },
    ingredient_alias::entities::AliasTable,
};

/// Candidate window for keyword searches.
pub const DEFAULT_SEARCH_LIMIT: u64 = 5;

/// Maps free-text ingredient names onto nutrition-database records.
///
/// Stages, first hit wins:
/// 1. exact name match on the alias-normalized name
/// 2. substring search over every keyword from the alias table, in order
/// 3. name-prefix match on the first character (low confidence)
///
/// A miss is `Ok(None)`; only repository failures are errors.
pub struct FoodResolver<'a, F> {
    repository: &'a F,
    aliases: &'a AliasTable,
    search_limit: u64,
}

impl<F> Clone for FoodResolver<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FoodResolver<'_, F> {}

impl<'a, F> FoodResolver<'a, F>
where
    F: FoodRepository,
{
    pub fn new(repository: &'a F, aliases: &'a AliasTable) -> Self {
        Self {
            repository,
            aliases,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_search_limit(mut self, search_limit: u64) -> Self {
        self.search_limit = search_limit.max(1);
        self
    }

    pub fn aliases(&self) -> &'a AliasTable {
        self.aliases
    }

    pub async fn resolve(&self, raw_name: &str) -> Result<Option<Resolution>, CoreError> {
        if raw_name.trim().is_empty() {
            debug!("skipping blank ingredient name");
            return Ok(None);
        }

        let normalized = self.aliases.normalize(raw_name);
        if normalized != raw_name {
            debug!(ingredient = raw_name, normalized = %normalized, "alias matched");
        }

        if let Some(record) = self.repository.find_by_name(&normalized).await? {
            info!(
                ingredient = raw_name,
                stage = "exact",
                record = %record.name,
                proprietary = record.is_proprietary,
                "food resolved"
            );
            return Ok(Some(Resolution {
                record,
                stage: MatchStage::Exact,
            }));
        }

        let keywords = self.aliases.generate_search_keywords(raw_name);
        debug!(ingredient = raw_name, ?keywords, "no exact match, searching keywords");

        for keyword in keywords {
            let mut candidates = self
                .repository
                .search_by_keyword(&keyword, self.search_limit)
                .await?;

            if candidates.is_empty() {
                continue;
            }

            let record = candidates.remove(0);
            if !candidates.is_empty() {
                debug!(
                    ingredient = raw_name,
                    others = ?candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
                    "other keyword candidates"
                );
            }

            info!(
                ingredient = raw_name,
                stage = "keyword",
                keyword = %keyword,
                record = %record.name,
                proprietary = record.is_proprietary,
                "food resolved"
            );
            return Ok(Some(Resolution {
                record,
                stage: MatchStage::Keyword { keyword },
            }));
        }

        if let Some(first) = raw_name.chars().next() {
            let prefix = first.to_string();
            if let Some(record) = self.repository.find_first_by_prefix(&prefix).await? {
                warn!(
                    ingredient = raw_name,
                    stage = "prefix",
                    prefix = %prefix,
                    record = %record.name,
                    "low-confidence match on first character, add an alias for this ingredient"
                );
                return Ok(Some(Resolution {
                    record,
                    stage: MatchStage::Prefix,
                }));
            }
        }

        warn!(ingredient = raw_name, "no food record matched, add an alias for this ingredient");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        domain::{food::entities::FoodRecord, ingredient_alias::entities::AliasEntry},
        infrastructure::food::repositories::InMemoryFoodRepository,
    };

    /// Records which query shapes the resolver issued.
    struct RecordingFoodRepository {
        inner: InMemoryFoodRepository,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingFoodRepository {
        fn new(records: Vec<FoodRecord>) -> Self {
            Self {
                inner: InMemoryFoodRepository::new(records),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl FoodRepository for RecordingFoodRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<FoodRecord>, CoreError> {
            self.record(format!("exact:{name}"));
            self.inner.find_by_name(name).await
        }

        async fn search_by_keyword(
            &self,
            keyword: &str,
            limit: u64,
        ) -> Result<Vec<FoodRecord>, CoreError> {
            self.record(format!("keyword:{keyword}"));
            self.inner.search_by_keyword(keyword, limit).await
        }

        async fn find_first_by_prefix(&self, prefix: &str) -> Result<Option<FoodRecord>, CoreError> {
            self.record(format!("prefix:{prefix}"));
            self.inner.find_first_by_prefix(prefix).await
        }
    }

    struct UnavailableFoodRepository;

    impl FoodRepository for UnavailableFoodRepository {
        async fn find_by_name(&self, _name: &str) -> Result<Option<FoodRecord>, CoreError> {
            Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn search_by_keyword(
            &self,
            _keyword: &str,
            _limit: u64,
        ) -> Result<Vec<FoodRecord>, CoreError> {
            Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
        }

        async fn find_first_by_prefix(
            &self,
            _prefix: &str,
        ) -> Result<Option<FoodRecord>, CoreError> {
            Err(CoreError::DatabaseUnavailable("connection refused".to_string()))
        }
    }

    fn foods() -> Vec<FoodRecord> {
        vec![
            FoodRecord::new("さけ 生").with_nutrients(133.0, 22.3, 4.1, 0.0, 66.0),
            FoodRecord::new("さけ 焼き").with_nutrients(160.0, 29.1, 5.1, 0.1, 57.0),
            FoodRecord::new("豚肉 ばら").with_nutrients(366.0, 14.4, 35.4, 0.1, 50.0),
            FoodRecord::new("しょうが 生").with_nutrients(28.0, 0.9, 0.3, 6.6, 6.0),
            FoodRecord::new("MUROの塩麹")
                .with_search_text("MUROの塩麹 しおこうじ 調味料")
                .with_nutrients(104.0, 1.9, 0.3, 22.0, 11600.0)
                .proprietary(),
            FoodRecord::new("塩麹 市販品")
                .with_search_text("塩麹 市販品")
                .with_nutrients(100.0, 1.5, 0.2, 21.0, 4400.0),
        ]
    }

    #[tokio::test]
    async fn test_exact_match_never_falls_through() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::builtin();
        let resolver = FoodResolver::new(&repository, &aliases);

        let resolution = resolver.resolve("鮭").await.unwrap().unwrap();

        assert_eq!(resolution.stage, MatchStage::Exact);
        assert_eq!(resolution.record.name, "さけ 生");
        assert_eq!(repository.calls(), vec!["exact:さけ 生".to_string()]);
    }

    #[tokio::test]
    async fn test_keyword_stage_prefers_proprietary_products() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::empty();
        let resolver = FoodResolver::new(&repository, &aliases);

        let resolution = resolver.resolve("塩麹").await.unwrap().unwrap();

        assert_eq!(
            resolution.stage,
            MatchStage::Keyword {
                keyword: "塩麹".to_string()
            }
        );
        assert_eq!(resolution.record.name, "MUROの塩麹");
    }

    #[tokio::test]
    async fn test_keyword_stage_walks_keywords_in_order() {
        let repository = RecordingFoodRepository::new(vec![
            FoodRecord::new("アボカド 生").with_nutrients(178.0, 2.1, 17.5, 0.8, 7.0),
        ]);
        let aliases = AliasTable::new(vec![AliasEntry::new(
            ["avocado", "アボカド"],
            "アボカド 果実",
        )]);
        let resolver = FoodResolver::new(&repository, &aliases);

        let resolution = resolver.resolve("avocado").await.unwrap().unwrap();

        assert_eq!(resolution.record.name, "アボカド 生");
        assert_eq!(
            repository.calls(),
            vec![
                "exact:アボカド 果実".to_string(),
                "keyword:avocado".to_string(),
                "keyword:アボカド 果実".to_string(),
                "keyword:アボカド".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_koji_product_found_by_raw_name_after_seasoning_alias() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::builtin();
        let resolver = FoodResolver::new(&repository, &aliases);

        let resolution = resolver.resolve("MUROの塩麹").await.unwrap().unwrap();

        assert_eq!(
            resolution.stage,
            MatchStage::Keyword {
                keyword: "MUROの塩麹".to_string()
            }
        );
        assert_eq!(resolution.record.name, "MUROの塩麹");
        assert_eq!(
            repository.calls(),
            vec!["exact:食塩".to_string(), "keyword:MUROの塩麹".to_string()]
        );
    }

    #[tokio::test]
    async fn test_prefix_fallback_is_low_confidence() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::empty();
        let resolver = FoodResolver::new(&repository, &aliases);

        let resolution = resolver.resolve("しょうゆ漬け").await.unwrap().unwrap();

        assert_eq!(resolution.stage, MatchStage::Prefix);
        assert_eq!(resolution.record.name, "しょうが 生");
        assert!(resolution.is_low_confidence());
    }

    #[tokio::test]
    async fn test_unknown_ingredient_is_not_an_error() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::builtin();
        let resolver = FoodResolver::new(&repository, &aliases);

        assert!(resolver.resolve("unknown-food-xyz").await.unwrap().is_none());
        assert!(resolver.resolve("   ").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let aliases = AliasTable::builtin();
        let resolver = FoodResolver::new(&UnavailableFoodRepository, &aliases);

        let result = resolver.resolve("鮭").await;

        assert!(matches!(result, Err(CoreError::DatabaseUnavailable(_))));
    }

    #[tokio::test]
    async fn test_keyword_candidates_tie_break_on_name() {
        let repository = RecordingFoodRepository::new(foods());
        let aliases = AliasTable::empty();
        let resolver = FoodResolver::new(&repository, &aliases).with_search_limit(0);

        let resolution = resolver.resolve("さけ").await.unwrap().unwrap();

        assert_eq!(resolution.record.name, "さけ 焼き");
    }
}
