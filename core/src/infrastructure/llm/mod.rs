pub mod azure_openai_client;

pub use azure_openai_client::AzureOpenAIClient;
