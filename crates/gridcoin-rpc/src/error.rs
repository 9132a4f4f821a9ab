use reqwest::StatusCode;

use crate::rpc::ErrorObject;

/// Default message for an [`RpcError`] that carries no server text.
const DEFAULT_RPC_ERROR_MESSAGE: &str = "the RPC server responded with an error";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The HTTP exchange itself failed, or the node answered with a status
    /// that cannot carry a JSON-RPC envelope.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not decode into the expected shape.
    #[error("decode JSON-RPC response: {source}; body={body}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The node handled the call and reported a method-specific error.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl CoreError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// The server-reported error, if this is one.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP request failed with status {status}")]
    Status { status: StatusCode },
}

impl TransportError {
    /// The HTTP status that caused the failure, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Network(err) => err.status(),
            Self::Status { status } => Some(*status),
        }
    }
}

/// An error reported by the node for a particular method call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("RPC error {code}: {message}")]
pub struct RpcError {
    code: i64,
    message: String,
}

impl RpcError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// An error with a plain message and no server code (`0`).
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for RpcError {
    fn default() -> Self {
        Self::from_message(DEFAULT_RPC_ERROR_MESSAGE)
    }
}

impl From<ErrorObject> for RpcError {
    fn from(err: ErrorObject) -> Self {
        Self::new(err.code, err.message)
    }
}
