use crate::configuration::InferenceSettings;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;

/// Invoke-API version tag expected by Anthropic models on the runtime.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Faults raised by the model runtime call.
///
/// Callers collapse these into a single `error` string at the envelope
/// boundary; the variants exist so logs and tests can tell an expired
/// credential from a saturated endpoint.
#[derive(Debug)]
pub enum InferenceError {
    /// No API token available in the environment
    MissingCredentials,
    /// Runtime rejected the credential (401/403)
    Unauthorized(String),
    /// Runtime throttled the request (429)
    RateLimited,
    /// Endpoint unreachable or timed out
    ServiceUnavailable(String),
    /// Any other non-success HTTP status
    HttpError(String),
    /// Response body did not contain a usable completion
    InvalidResponse(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Model API token is not configured"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::RateLimited => write!(f, "Rate limited by the model runtime"),
            Self::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for InferenceError {}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the managed model runtime.
///
/// Holds one `reqwest::Client`; safe to share across invocations since no
/// state outlives a single call.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http_client: reqwest::Client,
    endpoint: String,
    model_id: String,
    max_tokens: u32,
    temperature: f32,
    environment: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn try_new(settings: &InferenceSettings) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(InferenceClient {
            http_client,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model_id: settings.model_id.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            environment: settings.environment.clone(),
            api_token: settings.api_token.clone(),
        })
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Label stamped into response envelopes (e.g. "AWS Lambda").
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Single-turn completion: sends only the user's message, returns the
    /// first text segment of the model's structured reply.
    #[tracing::instrument(name = "Invoke model.", skip(self, message), fields(model_id = %self.model_id))]
    pub async fn generate(&self, message: &str) -> Result<String, InferenceError> {
        let api_token = self
            .api_token
            .as_deref()
            .ok_or(InferenceError::MissingCredentials)?;

        let url = format!("{}/model/{}/invoke", self.endpoint, self.model_id);
        let request_body = json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": [{"role": "user", "content": message}],
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(InferenceError::RateLimited);
            }
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                return Err(InferenceError::Unauthorized(format!("{}: {}", status, text)));
            }
            return Err(InferenceError::HttpError(format!(
                "model runtime returned {}: {}",
                status, text
            )));
        }

        let invoke: InvokeResponse = response
            .json()
            .await
            .map_err(|err| InferenceError::InvalidResponse(err.to_string()))?;

        invoke
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| {
                InferenceError::InvalidResponse("completion contained no text segment".to_string())
            })
    }
}
