//! Chat completions client implementation using reqwest.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{ChatModel, ChatRequest};

/// HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// Requests are sent once. Failures are returned to the caller as-is.
#[derive(Clone)]
pub struct HttpChatModel {
    api_key: Option<String>,
    api_key_env: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpChatModel")
            .field("api_url", &self.api_url)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpChatModel {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: Option<String>, config: &ModelApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_key_env: config.api_key_env.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    /// Create from the environment variable named in the configuration.
    ///
    /// A missing variable is not an error here; the first call reports it.
    pub fn from_env_with_config(config: &ModelApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env).ok().filter(|key| !key.trim().is_empty());
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ApiMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatModel for HttpChatModel {
    fn complete(&self, request: ChatRequest) -> Result<String, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::ModelInvocation(format!(
                "authentication failed: {} environment variable not set",
                self.api_key_env
            ))
        })?;

        let api_request = ApiRequest {
            model: &request.model,
            temperature: request.temperature,
            messages: [
                ApiMessage { role: "system", content: &request.system },
                ApiMessage { role: "user", content: &request.user },
            ],
        };

        let started = Instant::now();
        tracing::info!(model = %request.model, url = %self.api_url, "invoking chat model");
        let result = self.send_request(api_key, &api_request);
        match &result {
            Ok(text) => tracing::info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                chars = text.len(),
                "chat model responded"
            ),
            Err(err) => tracing::warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %err,
                "chat model call failed"
            ),
        }
        result
    }
}

impl HttpChatModel {
    fn send_request(&self, api_key: &str, request: &ApiRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ModelInvocation(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            let api_response: ApiResponse = response.json().map_err(|e| {
                AppError::ModelInvocation(format!("Failed to parse response: {}", e))
            })?;

            api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| AppError::ModelInvocation("No text content in response".into()))
        } else {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(AppError::ModelInvocation(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )))
        }
    }
}
