use crate::models::{ChatRequest, ChatResponse, FunctionEvent, FunctionResponse};
use crate::services::InferenceClient;
use anyhow::Context;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;

/// Fixed header set attached to every handler response, success or failure.
/// Browsers talk to the function URL directly, so CORS rides along always.
fn response_headers() -> HashMap<String, String> {
    [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        (
            "Access-Control-Allow-Headers",
            "Content-Type, Authorization, X-Requested-With, Accept, Origin",
        ),
        ("Access-Control-Max-Age", "86400"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

fn respond(status_code: u16, envelope: &ChatResponse) -> anyhow::Result<FunctionResponse> {
    let body = serde_json::to_string(envelope).context("Failed to serialize response envelope")?;
    Ok(FunctionResponse::new(status_code, response_headers(), body))
}

/// Entry point of the inference handler: one invocation event in, one
/// structured response out. Faults never escape; anything the pipeline did
/// not anticipate becomes a generic 500 with the detail kept in the logs.
#[tracing::instrument(name = "Handle invocation.", skip_all)]
pub async fn handle(event: FunctionEvent, client: &InferenceClient) -> FunctionResponse {
    match handle_inner(event, client).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!("Invocation failed: {:?}", err);
            let body = json!({
                "success": false,
                "error": "Internal server error",
                "timestamp": Utc::now(),
            });
            FunctionResponse::new(500, response_headers(), body.to_string())
        }
    }
}

async fn handle_inner(
    event: FunctionEvent,
    client: &InferenceClient,
) -> anyhow::Result<FunctionResponse> {
    let method = event.http_method().to_string();

    // CORS preflight
    if method == "OPTIONS" {
        tracing::info!("CORS preflight request");
        return Ok(FunctionResponse::new(200, response_headers(), String::new()));
    }

    if method != "POST" {
        tracing::warn!("Method not allowed: {}", method);
        return respond(
            405,
            &ChatResponse::error(format!("Method {} not allowed. Use POST.", method)),
        );
    }

    let raw_body = event.body.as_deref().unwrap_or_default();
    if raw_body.is_empty() {
        tracing::warn!("Invocation without a request body");
        return respond(400, &ChatResponse::error("Request body is required"));
    }

    let request: ChatRequest = match serde_json::from_str(raw_body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!("Malformed request body: {}", err);
            return respond(400, &ChatResponse::error("Invalid JSON in request body"));
        }
    };

    let message = request.message.as_deref().unwrap_or("").trim().to_string();
    if message.is_empty() {
        tracing::warn!("Message field empty after trimming");
        return respond(
            400,
            &ChatResponse::error("Message field is required and cannot be empty"),
        );
    }

    tracing::info!(message_chars = message.len(), "Dispatching message to the model runtime");

    match client.generate(&message).await {
        Ok(completion) => {
            tracing::info!("Completion generated");
            respond(
                200,
                &ChatResponse::ok(
                    completion,
                    request.conversation_id,
                    client.environment(),
                    client.model_id(),
                ),
            )
        }
        Err(err) => {
            tracing::error!("Inference call failed: {}", err);
            respond(500, &ChatResponse::error(err.to_string()))
        }
    }
}
