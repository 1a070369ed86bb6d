use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body accepted on `POST /api/chat`.
///
/// `message` is optional at the parse level so that a missing or null field
/// reaches the validation step and produces the dedicated error message
/// instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Envelope returned to the caller for every invocation outcome.
///
/// Exactly one of `response`/`error` is present, matching `success`.
/// `conversation_id` is an opaque echo of whatever the caller sent.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatResponse {
    pub fn ok(
        response: String,
        conversation_id: Option<String>,
        environment: &str,
        model: &str,
    ) -> Self {
        ChatResponse {
            success: true,
            response: Some(response),
            error: None,
            conversation_id,
            timestamp: Utc::now(),
            environment: Some(environment.to_string()),
            model: Some(model.to_string()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ChatResponse {
            success: false,
            response: None,
            error: Some(message.into()),
            conversation_id: None,
            timestamp: Utc::now(),
            environment: None,
            model: None,
        }
    }
}
