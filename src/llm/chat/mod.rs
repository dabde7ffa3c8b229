pub mod gemini;
pub mod yi;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;

use self::gemini::GeminiChatClient;
use self::yi::YiChatClient;
use super::{LlmConfig, ProviderKind};

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

/// One blocking completion call against an upstream provider. Transport
/// failures and non-2xx statuses come back as `Err`; unexpected body shapes
/// are already downgraded to fallback text by the extractor.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;

    fn name(&self) -> &'static str;
    fn get_model(&self) -> String;
}

pub fn new_client(
    config: &LlmConfig,
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client: Arc<dyn ChatClient> = match config.provider {
        ProviderKind::Gemini => {
            let specific_client = GeminiChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
        ProviderKind::Yi => {
            let specific_client = YiChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
    };
    Ok(client)
}
