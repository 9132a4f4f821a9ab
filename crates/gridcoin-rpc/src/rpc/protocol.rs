use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, TransportError};

/// Protocol version sent in every request body.
pub const JSONRPC_VERSION: &str = "1.0";

// ==============================================================================
// Request
// ==============================================================================

/// Body of a JSON-RPC 1.0 request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    jsonrpc: &'static str,
    id: String,
    method: String,
    params: Vec<serde_json::Value>,
}

impl Request {
    /// A request with an empty `id`. `params` is always sent as an array.
    pub fn new(method: impl Into<String>, params: Vec<serde_json::Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: String::new(),
            method: method.into(),
            params,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn params(&self) -> &[serde_json::Value] {
        &self.params
    }
}

// ==============================================================================
// Response Envelope
// ==============================================================================

/// Decoded JSON-RPC response. When `error` is set, `result` is `None`.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub id: String,
    pub result: Option<T>,
    pub error: Option<ErrorObject>,
}

/// Wire shape of a reply; `result` stays untyped until `error` is checked.
#[derive(Deserialize)]
struct RawResponse {
    #[serde(default, deserialize_with = "deserialize_id")]
    id: String,
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<ErrorObject>,
}

/// Method-specific error reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T> Response<T> {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_successful(&self) -> bool {
        !self.is_error()
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Unwrap the envelope: the error wins over any result, and a missing
    /// or `null` result is decoded from JSON `null`.
    pub fn into_result(self) -> Result<T, CoreError> {
        if let Some(err) = self.error {
            return Err(CoreError::Rpc(err.into()));
        }
        match self.result {
            Some(result) => Ok(result),
            None => serde_json::from_value(serde_json::Value::Null).map_err(|source| {
                CoreError::Serialization {
                    source,
                    body: "null".to_owned(),
                }
            }),
        }
    }
}

/// Nodes echo the id back as sent, but some answer with a number or null.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

// ==============================================================================
// Status Policy
// ==============================================================================

/// Whether a reply with this status may carry a JSON-RPC envelope.
///
/// Nodes report method errors with `500 Internal Server Error`, so only that
/// status is decoded alongside 2xx. Everything else is a transport failure.
pub(crate) fn check_status(status: StatusCode) -> Result<(), TransportError> {
    if status.is_success() || status == StatusCode::INTERNAL_SERVER_ERROR {
        Ok(())
    } else {
        Err(TransportError::Status { status })
    }
}

/// Decode a reply body. An `error` object wins: the result is then dropped
/// without being decoded into `T`.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Response<T>, CoreError> {
    let serialization = |source: serde_json::Error| CoreError::Serialization {
        source,
        body: body.to_owned(),
    };

    let raw: RawResponse = serde_json::from_str(body).map_err(serialization)?;
    if raw.error.is_some() {
        return Ok(Response {
            id: raw.id,
            result: None,
            error: raw.error,
        });
    }

    let result = match raw.result {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => Some(serde_json::from_value(value).map_err(serialization)?),
    };
    Ok(Response {
        id: raw.id,
        result,
        error: None,
    })
}
