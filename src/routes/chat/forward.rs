use crate::configuration::Settings;
use actix_web::{post, web, HttpResponse};
use serde_json::json;

/// POST /api/chat
/// Forwards the raw body to the configured function endpoint and mirrors the
/// reply. The body is opaque here: validation belongs to the handler side.
#[tracing::instrument(name = "Forward chat request.", skip_all)]
#[post("/api/chat")]
pub async fn forward(
    body: web::Bytes,
    http_client: web::Data<reqwest::Client>,
    settings: web::Data<Settings>,
) -> HttpResponse {
    let function_url = &settings.relay.function_url;
    tracing::info!(bytes = body.len(), %function_url, "Forwarding chat request");

    let upstream = http_client
        .post(function_url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body.to_vec())
        .send()
        .await;

    match upstream {
        Ok(response) if response.status().is_success() => match response.bytes().await {
            Ok(payload) => HttpResponse::Ok()
                .content_type("application/json")
                .body(payload.to_vec()),
            Err(err) => function_error(err.to_string()),
        },
        Ok(response) => function_error(format!("HTTP {}", response.status())),
        Err(err) => function_error(err.to_string()),
    }
}

/// POST catch-all: anything other than /api/chat is not an API path.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "Not found"}))
}

/// OPTIONS catch-all. Preflights carrying Access-Control-Request-Method are
/// answered by the CORS middleware before they reach routing; this keeps the
/// remaining OPTIONS probes at a bare 200 instead of a file-service 405.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn function_error(details: String) -> HttpResponse {
    tracing::error!("Function endpoint call failed: {}", details);
    HttpResponse::InternalServerError().json(json!({
        "error": format!("Lambda error: {}", details),
    }))
}
