use log::{error, info};
use std::error::Error;
use std::sync::Arc;

use crate::cli::Args;
use crate::llm::chat::{new_client, ChatClient};
use crate::llm::{LlmConfig, ProviderKind};
use crate::prompt::{build_prompt, DEFAULT_PERSONA};

pub const UNAVAILABLE_FALLBACK: &str =
    "I'm sorry, I couldn't process your request at the moment. Please try again later.";

/// Result of one relayed chat turn. `error` is set when the upstream call
/// failed; the reply then carries the user-safe fallback text.
pub struct ChatOutcome {
    pub reply: String,
    pub conversation_history: Vec<String>,
    pub error: Option<String>,
}

pub struct ChatRelay {
    client: Arc<dyn ChatClient>,
    persona: String,
}

impl ChatRelay {
    pub fn new(client: Arc<dyn ChatClient>, persona: String) -> Self {
        Self { client, persona }
    }

    /// Builds the relay from startup configuration. Provider selection is a
    /// one-time decision here; requests never switch providers.
    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let provider: ProviderKind = args
            .provider
            .parse()
            .map_err(|e| format!("Invalid chat provider: {}", e))?;

        let api_key = match provider {
            ProviderKind::Gemini => args.gemini_key.clone(),
            ProviderKind::Yi => args.yi_key.clone(),
        };

        let config = LlmConfig {
            provider,
            api_key,
            chat_model: args.chat_model.clone(),
            base_url: args.chat_base_url.clone(),
        };

        let client = new_client(&config)?;
        info!(
            "Chat relay ready: provider={} model={}",
            client.name(),
            client.get_model()
        );

        let persona = args
            .persona
            .clone()
            .unwrap_or_else(|| DEFAULT_PERSONA.to_string());
        Ok(Self::new(client, persona))
    }

    pub async fn process_chat(
        &self,
        message: &str,
        role: Option<&str>,
        history: &[String],
    ) -> ChatOutcome {
        let persona = role.unwrap_or(&self.persona);
        let (prompt, mut conversation_history) = build_prompt(message, persona, history);

        match self.client.complete(&prompt).await {
            Ok(completion) => {
                info!("Assistant reply: {}", completion.response);
                conversation_history.push(format!("Assistant: {}", completion.response));
                ChatOutcome {
                    reply: completion.response,
                    conversation_history,
                    error: None,
                }
            }
            Err(e) => {
                error!("Error in processing chat: {}", e);
                ChatOutcome {
                    reply: UNAVAILABLE_FALLBACK.to_string(),
                    conversation_history,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
