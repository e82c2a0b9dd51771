mod tests;
mod types;

use crate::config::CompletionConfig;
use crate::error::{PatrawlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use types::{ChatMessage, ChatRequest, ChatResponse};

/// Opaque text-completion capability: (system, user) instructions in, plain
/// text out. The extraction pipeline takes this as an injected handle so
/// tests can substitute a deterministic stub.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Production implementation against an OpenAI-compatible chat endpoint
/// (Groq by default).
pub struct ChatClient {
    config: CompletionConfig,
    client: Client,
}

impl ChatClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PatrawlError::Completion(format!("client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    /// Construct from [`CompletionConfig::from_env`] (reads `GROQ_API_KEY`).
    pub fn from_env() -> Result<Self> {
        Self::new(CompletionConfig::from_env())
    }
}

#[async_trait]
impl Completion for ChatClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut req = self.client.post(&self.config.api_url).json(&request);
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| PatrawlError::Completion(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PatrawlError::Completion(format!(
                "HTTP status {status}: {}",
                truncate(&body, 200)
            )));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| PatrawlError::Completion(format!("malformed response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| PatrawlError::Completion("response contained no choices".to_string()))
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
