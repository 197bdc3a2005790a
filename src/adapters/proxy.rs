use crate::core::formatter::PhoneFormatter;
use crate::core::{HttpReply, NumberFormatter};
use crate::utils::error::{FormatError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The subset of an API Gateway (REST or HTTP API) or function URL event
/// this service reads. Every field is optional so any proxy payload version decodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyRequest {
    pub fn request_path(&self) -> Option<&str> {
        self.raw_path.as_deref().or(self.path.as_deref())
    }

    pub fn body_bytes(&self) -> Result<Vec<u8>> {
        let body = self.body.as_deref().unwrap_or_default();

        if self.is_base64_encoded {
            STANDARD
                .decode(body)
                .map_err(|e| FormatError::InvalidBody {
                    message: format!("body is not valid base64: {}", e),
                })
        } else {
            Ok(body.as_bytes().to_vec())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl From<HttpReply> for ProxyResponse {
    fn from(reply: HttpReply) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), reply.content_type.to_string());

        Self {
            status_code: reply.status,
            headers,
            body: reply.body,
            is_base64_encoded: false,
        }
    }
}

pub fn handle_proxy_request<F: NumberFormatter>(
    formatter: &PhoneFormatter<F>,
    request: &ProxyRequest,
) -> ProxyResponse {
    tracing::debug!(
        "Proxy request: method={:?}, path={:?}, base64={}",
        request.http_method,
        request.request_path(),
        request.is_base64_encoded
    );

    let reply = match request.body_bytes() {
        Ok(body) => formatter.handle(&body),
        Err(e) => formatter.respond(Err(e)),
    };

    reply.into()
}
