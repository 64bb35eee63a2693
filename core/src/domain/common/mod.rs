use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::seasoning::value_objects::RiceKojiPolicy;

pub mod entities;
#[cfg(test)]
pub(crate) mod fakes;
pub mod services;

#[derive(Clone, Debug)]
pub struct KojilabConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub nutrition: NutritionConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Full chat-completions URL, deployment and api-version included.
    pub azure_openai_endpoint: String,
    pub azure_openai_api_key: String,
    pub max_tokens: u32,
}

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    /// JSON file replacing the built-in alias table.
    pub alias_table_path: Option<String>,
    pub search_limit: u64,
    pub rice_koji_policy: RiceKojiPolicy,
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            alias_table_path: None,
            search_limit: crate::domain::food::services::DEFAULT_SEARCH_LIMIT,
            rice_koji_policy: RiceKojiPolicy::default(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Rounds half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
