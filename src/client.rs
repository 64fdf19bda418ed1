use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::GenerateError;
use crate::models::{GenerateRequest, GenerationResult};
use crate::openai::{ChatRequest, ChatResponse};

// Which kind of endpoint sits behind the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Provider {
    /// Same-origin style relay taking `{"prompt"}` and answering with the result
    Relay,
    /// OpenAI-compatible chat completions in JSON mode
    Openai,
}

impl Provider {
    pub fn default_path(&self) -> &'static str {
        match self {
            Provider::Relay => "/api/generate",
            Provider::Openai => "/v1/chat/completions",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub path: String,
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: String,
}

impl ClientConfig {
    pub fn relay(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: Provider::Relay.default_path().to_string(),
            provider: Provider::Relay,
            api_key: None,
            model: "gpt-4o".to_string(),
        }
    }

    pub fn openai(base_url: impl Into<String>, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: Provider::Openai.default_path().to_string(),
            provider: Provider::Openai,
            api_key,
            model: model.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

/// Issues one generation request per call and validates the answer.
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl GenerationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerateError> {
        if prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        let url = self.config.endpoint();
        info!("Requesting generation from {}", url);

        let request = match self.config.provider {
            Provider::Relay => self.http.post(&url).json(&GenerateRequest {
                prompt: prompt.to_string(),
            }),
            Provider::Openai => {
                let builder = self
                    .http
                    .post(&url)
                    .json(&ChatRequest::for_prompt(&self.config.model, prompt));
                match &self.config.api_key {
                    Some(key) => builder.bearer_auth(key),
                    None => builder,
                }
            }
        };

        let response = request.send().await?;
        let status = response.status();
        debug!("Generation endpoint answered {}", status);
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!("Generation failed with {}: {}", status, message);
            return Err(GenerateError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let payload = match self.config.provider {
            Provider::Relay => body,
            Provider::Openai => {
                if body.trim().is_empty() {
                    return Err(GenerateError::empty_response());
                }
                let chat: ChatResponse = serde_json::from_str(&body)
                    .map_err(|e| GenerateError::Malformed(format!("malformed response: {e}")))?;
                chat.into_content().ok_or_else(GenerateError::empty_response)?
            }
        };

        parse_result(&payload)
    }
}

// Parse and validate a result body
pub fn parse_result(body: &str) -> Result<GenerationResult, GenerateError> {
    if body.trim().is_empty() {
        return Err(GenerateError::empty_response());
    }
    let result: GenerationResult = serde_json::from_str(body)
        .map_err(|e| GenerateError::Malformed(format!("malformed response: {e}")))?;
    result
        .validate()
        .map_err(|e| GenerateError::Malformed(format!("malformed response: {e}")))?;
    Ok(result)
}

// Server-provided message if the body carries one, else one built from the status
fn error_message(status: StatusCode, body: &str) -> String {
    let from_body = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        let text = match &v["error"] {
            Value::String(s) => Some(s.clone()),
            Value::Object(obj) => obj.get("message").and_then(Value::as_str).map(str::to_string),
            _ => None,
        };
        text.or_else(|| v["message"].as_str().map(str::to_string))
    });

    from_body
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()))
}
