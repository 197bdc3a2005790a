use crate::utils::error::{FormatError, Result};
use serde::{Deserialize, Serialize};

pub const PHONE_NUMBER_FIELD: &str = "PhoneNumber";

pub const ERROR_PREFIX: &str = "Invalid input or error processing phone number.";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    pub phone_number: String,
}

impl FormatRequest {
    /// Decodes a request body of the form `{"PhoneNumber": "..."}`.
    ///
    /// Other keys are ignored. A `null` value counts as missing.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        let object = value.as_object().ok_or(FormatError::NotAnObject)?;

        match object.get(PHONE_NUMBER_FIELD) {
            None | Some(serde_json::Value::Null) => Err(FormatError::MissingField {
                field: PHONE_NUMBER_FIELD.to_string(),
            }),
            Some(serde_json::Value::String(phone_number)) => Ok(Self {
                phone_number: phone_number.clone(),
            }),
            Some(other) => Err(FormatError::InvalidFieldType {
                field: PHONE_NUMBER_FIELD.to_string(),
                found: json_type_name(other).to_string(),
            }),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatResponse {
    #[serde(rename = "OriginalPhoneNumber")]
    pub original_phone_number: String,
    #[serde(rename = "InternationalPhoneNumber")]
    pub international_phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpReply {
    pub fn ok_json(body: String) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_JSON,
            body,
        }
    }

    pub fn bad_request(error: &FormatError) -> Self {
        Self {
            status: 400,
            content_type: CONTENT_TYPE_TEXT,
            body: format!("{} {}", ERROR_PREFIX, error),
        }
    }
}
