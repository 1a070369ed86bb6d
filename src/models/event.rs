use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;

/// Invocation event as delivered by the function-URL platform.
///
/// Every level is optional: the platform omits pieces depending on how the
/// function is invoked, so lookups must not fail on partial events.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FunctionEvent {
    #[serde(rename = "requestContext", skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HttpContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl FunctionEvent {
    pub fn from_parts(method: &str, body: Option<String>) -> Self {
        FunctionEvent {
            request_context: Some(RequestContext {
                http: Some(HttpContext {
                    method: Some(method.to_string()),
                }),
            }),
            body,
        }
    }

    /// HTTP method of the invocation; a missing value means POST.
    pub fn http_method(&self) -> &str {
        self.request_context
            .as_ref()
            .and_then(|context| context.http.as_ref())
            .and_then(|http| http.method.as_deref())
            .unwrap_or("POST")
    }
}

/// Structured response handed back to the platform.
#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    pub fn new(status_code: u16, headers: HashMap<String, String>, body: String) -> Self {
        FunctionResponse {
            status_code,
            headers,
            body,
        }
    }
}
