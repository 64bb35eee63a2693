use clap::Parser;
use kojilab_core::domain::{
    common::{DatabaseConfig, KojilabConfig, LLMConfig, NutritionConfig},
    seasoning::value_objects::RiceKojiPolicy,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "kojilab-api", about, version)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub db: DatabaseArgs,
    #[command(flatten)]
    pub llm: LLMArgs,
    #[command(flatten)]
    pub nutrition: NutritionArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
    /// Shop used when neither the body nor the app proxy names one.
    #[arg(long, env = "SHOPIFY_DEFAULT_SHOP", default_value = "unknown-shop")]
    pub default_shop: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,
    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,
    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,
    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,
    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "kojilab")]
    pub name: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LLMArgs {
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT", default_value = "")]
    pub azure_openai_endpoint: String,
    #[arg(long, env = "AZURE_OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub azure_openai_api_key: String,
    #[arg(long = "llm-max-tokens", env = "LLM_MAX_TOKENS", default_value_t = 2000)]
    pub max_tokens: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct NutritionArgs {
    #[arg(long = "alias-table", env = "ALIAS_TABLE_PATH")]
    pub alias_table_path: Option<String>,
    #[arg(long, env = "FOOD_SEARCH_LIMIT", default_value_t = 5)]
    pub search_limit: u64,
    #[arg(long, env = "RICE_KOJI_POLICY", default_value = "require_explicit")]
    pub rice_koji_policy: RiceKojiPolicy,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for KojilabConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                azure_openai_endpoint: args.llm.azure_openai_endpoint,
                azure_openai_api_key: args.llm.azure_openai_api_key,
                max_tokens: args.llm.max_tokens,
            },
            nutrition: NutritionConfig {
                alias_table_path: args.nutrition.alias_table_path,
                search_limit: args.nutrition.search_limit,
                rice_koji_policy: args.nutrition.rice_koji_policy,
            },
        }
    }
}
