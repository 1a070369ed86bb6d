use crate::models::FunctionEvent;
use crate::services::{handler, InferenceClient};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

/// Front of the handler service: every method on every path becomes a
/// platform-style invocation event, and the structured response is replayed
/// onto the wire. This is what the managed function-URL platform does for a
/// deployed handler.
#[tracing::instrument(name = "Invoke handler.", skip_all, fields(method = %request.method(), path = %request.path()))]
pub async fn invoke(
    request: HttpRequest,
    body: web::Bytes,
    inference_client: web::Data<InferenceClient>,
) -> HttpResponse {
    let body = if body.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(&body).into_owned())
    };
    let event = FunctionEvent::from_parts(request.method().as_str(), body);

    let function_response = handler::handle(event, inference_client.get_ref()).await;

    let status = StatusCode::from_u16(function_response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut response = HttpResponse::build(status);
    for (name, value) in &function_response.headers {
        response.insert_header((name.as_str(), value.as_str()));
    }
    response.body(function_response.body)
}
