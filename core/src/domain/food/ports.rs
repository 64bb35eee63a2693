use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, food::entities::FoodRecord};

/// Read-only access to the nutrition database.
#[cfg_attr(test, mockall::automock)]
pub trait FoodRepository: Send + Sync {
    /// Record whose name equals `name`.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<FoodRecord>, CoreError>> + Send;

    /// Records whose name or search text contains `keyword`, proprietary
    /// products first, then by name ascending, at most `limit` rows.
    fn search_by_keyword(
        &self,
        keyword: &str,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<FoodRecord>, CoreError>> + Send;

    /// First record (by name ascending) whose name starts with `prefix`.
    fn find_first_by_prefix(
        &self,
        prefix: &str,
    ) -> impl Future<Output = Result<Option<FoodRecord>, CoreError>> + Send;
}
