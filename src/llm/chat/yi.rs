use async_trait::async_trait;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client as HttpClient,
};
use serde::Serialize;
use std::error::Error as StdError;

use super::{ChatClient, CompletionResponse};
use crate::llm::extract::extract_reply;
use crate::llm::LlmConfig;

const DEFAULT_BASE_URL: &str = "https://api.lingyiwanwu.com/v1";
const DEFAULT_MODEL: &str = "yi-large";
const TEMPERATURE: f32 = 0.3;

#[derive(Serialize)]
struct YiChatRequest {
    model: String,
    messages: Vec<YiMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct YiMessage {
    role: String,
    content: String,
}

#[derive(Debug)]
pub struct YiChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

impl YiChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| format!("Invalid API key format: {}", e))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            model: chat_model,
            base_url: api_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        if config.api_key.is_empty() {
            return Err("Yi API key is required for YiChatClient".into());
        }
        Self::new(
            config.api_key.clone(),
            config.chat_model.clone(),
            config.base_url.clone(),
        )
    }
}

#[async_trait]
impl ChatClient for YiChatClient {
    async fn complete(
        &self,
        prompt: &str,
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let payload = YiChatRequest {
            model: self.model.clone(),
            messages: vec![YiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: TEMPERATURE,
        };

        let body = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        info!("Lingyiwanwu API call successful.");
        Ok(CompletionResponse {
            response: extract_reply(&body).into_text(),
        })
    }

    fn name(&self) -> &'static str {
        "yi"
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_carries_model_and_temperature() {
        let payload = YiChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![YiMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            temperature: TEMPERATURE,
        };
        let serialized = serde_json::to_string(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "yi-large",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.3
            })
        );
    }

    #[test]
    fn rejects_keys_that_cannot_form_a_header() {
        let err = YiChatClient::new("bad\nkey".to_string(), None, None).unwrap_err();
        assert!(err.to_string().contains("Invalid API key format"));
    }
}
