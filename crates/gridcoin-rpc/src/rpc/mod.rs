//! JSON-RPC transport layer.
//!
//! Defines the [`RpcTransport`] trait, the JSON-RPC 1.0 envelope types and an
//! HTTP implementation ([`HttpRpcClient`]) plus a test mock
//! (`mock::MockTransport`).

mod http_adapter;
pub mod methods;
#[cfg(test)]
pub mod mock;
mod protocol;

pub use http_adapter::{parse_connection, HttpRpcClient};
pub use protocol::{ErrorObject, Request, Response, JSONRPC_VERSION};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Sends one JSON-RPC request and returns the decoded envelope.
///
/// Implementations apply the status policy (2xx and 500 carry an envelope,
/// anything else is a transport error) and never retry.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send<T>(&self, request: Request) -> Result<Response<T>, CoreError>
    where
        T: DeserializeOwned + Send + 'static;

    /// Build a request with an empty id for `method` and send it.
    async fn execute<T>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Response<T>, CoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        if method.is_empty() {
            return Err(CoreError::InvalidRequest(
                "rpc method name must not be empty".to_owned(),
            ));
        }
        self.send(Request::new(method, params)).await
    }
}
