use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{common::entities::app_errors::CoreError, recipe::ports::LLMClient};

const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct AzureOpenAIClient {
    /// Full chat-completions URL, deployment and api-version included.
    endpoint: String,
    api_key: String,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl AzureOpenAIClient {
    pub fn new(endpoint: String, api_key: String, max_tokens: u32) -> Self {
        Self {
            endpoint,
            api_key,
            max_tokens,
            client: Client::new(),
        }
    }

    fn request(&self, system_prompt: String, user_message: String) -> ChatRequest {
        ChatRequest {
            messages: vec![
                Message {
                    role: "system",
                    content: system_prompt,
                },
                Message {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }

    async fn call_chat_completions(&self, request: ChatRequest) -> Result<String, CoreError> {
        if self.api_key.is_empty() {
            tracing::error!("Azure OpenAI API key is not configured");
            return Err(CoreError::Configuration(
                "Azure OpenAI API key is not configured".to_string(),
            ));
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Azure OpenAI request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Azure OpenAI error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Azure OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        extract_content(chat_response)
    }
}

fn extract_content(response: ChatResponse) -> Result<String, CoreError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
}

impl LLMClient for AzureOpenAIClient {
    async fn generate_recipes(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> Result<String, CoreError> {
        let request = self.request(system_prompt, user_message);
        self.call_chat_completions(request).await
    }
}
