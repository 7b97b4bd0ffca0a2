use super::{Upstream, UpstreamError};
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

pub struct LlmClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.api_base.trim_end_matches('/')
        )
    }

    fn build_request(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<CreateChatCompletionRequest, UpstreamError> {
        let invalid = |e: async_openai::error::OpenAIError| UpstreamError::InvalidRequest(e.to_string());

        let messages = vec![ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(invalid)?,
        )];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.config.model)
            .messages(messages)
            .temperature(temperature);
        if let Some(max_tokens) = self.config.max_tokens {
            args.max_tokens(max_tokens);
        }

        args.build().map_err(invalid)
    }
}

fn extract_content(body: &[u8]) -> Result<String, UpstreamError> {
    let reply: CompletionReply = serde_json::from_slice(body)
        .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

    reply
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| UpstreamError::MalformedResponse("no completion content".to_string()))
}

#[async_trait]
impl Upstream for LlmClient {
    fn is_configured(&self) -> bool {
        self.config
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    async fn send(&self, prompt: &str, temperature: f32) -> Result<String, UpstreamError> {
        let request = self.build_request(prompt, temperature)?;
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        debug!(
            "Sending {} prompt chars to {} (model={}, temperature={})",
            prompt.len(),
            self.endpoint(),
            self.config.model,
            temperature
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                cause: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::BadResponse {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| UpstreamError::Transport {
            cause: e.to_string(),
        })?;

        extract_content(&body)
    }
}
