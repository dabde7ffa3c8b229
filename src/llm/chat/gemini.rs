use async_trait::async_trait;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client as HttpClient,
};
use serde::Serialize;
use std::error::Error as StdError;

use super::{ChatClient, CompletionResponse};
use crate::llm::extract::extract_reply;
use crate::llm::LlmConfig;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.0-pro-latest";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

pub struct GeminiChatClient {
    http: HttpClient,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiChatClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            api_key,
            model: chat_model,
            base_url: api_url,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        if config.api_key.is_empty() {
            return Err("Google API key is required for GeminiChatClient".into());
        }
        Self::new(
            config.api_key.clone(),
            config.chat_model.clone(),
            config.base_url.clone(),
        )
    }
}

#[async_trait]
impl ChatClient for GeminiChatClient {
    async fn complete(
        &self,
        prompt: &str,
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let payload = GenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let body = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        info!("Google API call successful.");
        Ok(CompletionResponse {
            response: extract_reply(&body).into_text(),
        })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }
}
