use std::{cmp::Ordering, path::Path, sync::Arc};

use tracing::info;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::{entities::FoodRecord, ports::FoodRepository},
};

/// Fixture-backed food table with the same ordering rules as the Postgres
/// adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodRepository {
    records: Arc<Vec<FoodRecord>>,
}

impl InMemoryFoodRepository {
    pub fn new(records: Vec<FoodRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records: Vec<FoodRecord> = serde_json::from_str(json)
            .map_err(|e| CoreError::Configuration(format!("invalid food fixture: {e}")))?;

        Ok(Self::new(records))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;

        let repository = Self::from_json(&json)?;
        info!(path = %path.display(), records = repository.len(), "loaded food fixture");
        Ok(repository)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn proprietary_then_name(a: &&FoodRecord, b: &&FoodRecord) -> Ordering {
    b.is_proprietary
        .cmp(&a.is_proprietary)
        .then_with(|| a.name.cmp(&b.name))
}

impl FoodRepository for InMemoryFoodRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<FoodRecord>, CoreError> {
        Ok(self.records.iter().find(|r| r.name == name).cloned())
    }

    async fn search_by_keyword(
        &self,
        keyword: &str,
        limit: u64,
    ) -> Result<Vec<FoodRecord>, CoreError> {
        let mut hits: Vec<&FoodRecord> = self.records.iter().filter(|r| r.mentions(keyword)).collect();
        hits.sort_by(proprietary_then_name);

        Ok(hits
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn find_first_by_prefix(&self, prefix: &str) -> Result<Option<FoodRecord>, CoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.name.starts_with(prefix))
            .min_by(|a, b| a.name.cmp(&b.name))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryFoodRepository {
        InMemoryFoodRepository::new(vec![
            FoodRecord::new("塩麹 市販品").with_nutrients(138.0, 1.9, 0.3, 31.6, 4500.0),
            FoodRecord::new("MUROの塩麹")
                .with_search_text("MUROの塩麹 塩こうじ 塩麹")
                .with_nutrients(150.0, 2.0, 0.2, 33.0, 11600.0)
                .proprietary(),
            FoodRecord::new("食塩").with_nutrients(0.0, 0.0, 0.0, 0.0, 39000.0),
            FoodRecord::new("しょうゆ こいくち").with_search_text("醤油 しょうゆ"),
        ])
    }

    #[tokio::test]
    async fn test_keyword_search_orders_proprietary_first() {
        let hits = repository().search_by_keyword("塩麹", 5).await.unwrap();
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();

        assert_eq!(names, vec!["MUROの塩麹", "塩麹 市販品"]);
    }

    #[tokio::test]
    async fn test_keyword_search_matches_search_text_and_respects_limit() {
        let repository = repository();

        let hits = repository.search_by_keyword("醤油", 5).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "しょうゆ こいくち");

        let hits = repository.search_by_keyword("塩", 1).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_proprietary);
    }

    #[tokio::test]
    async fn test_prefix_returns_lowest_name() {
        let record = repository().find_first_by_prefix("塩").await.unwrap().unwrap();
        assert_eq!(record.name, "塩麹 市販品");

        assert!(repository().find_first_by_prefix("鮭").await.unwrap().is_none());
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let repository = InMemoryFoodRepository::from_json(
            r#"[{"name": "さけ 生", "sodium": 66.0}, {"name": "MUROの塩麹", "is_proprietary": true}]"#,
        )
        .unwrap();

        assert_eq!(repository.len(), 2);
        assert_eq!(repository.records[0].protein, None);
        assert!(repository.records[1].is_proprietary);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            InMemoryFoodRepository::from_json("{"),
            Err(CoreError::Configuration(_))
        ));
    }
}
