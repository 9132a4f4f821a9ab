use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::rpc::{methods, HttpRpcClient, RpcTransport};
use crate::types::{ServerInfo, WalletInfo};

// ==============================================================================
// GridcoinClient: typed operations over a JSON-RPC transport
// ==============================================================================

/// Client for a Gridcoin node's JSON-RPC interface.
///
/// Each operation is one request with no retry. A reply whose envelope
/// carries an `error` becomes [`CoreError::Rpc`] even if a result is present.
#[derive(Debug)]
pub struct GridcoinClient<R = HttpRpcClient> {
    rpc: R,
}

impl GridcoinClient<HttpRpcClient> {
    /// Connect to `host` on the mainnet port over plain HTTP.
    pub fn new(host: &str, user: &str, password: &str) -> Result<Self, CoreError> {
        Self::from_config(&ClientConfig::new(host, user, password))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        Ok(Self::from_transport(HttpRpcClient::new(config)?))
    }

    /// Replace the credentials used by all subsequent calls.
    pub fn set_credentials(&self, user: &str, password: &str) -> Result<(), CoreError> {
        self.rpc.set_credentials(user, password)
    }
}

impl<R: RpcTransport> GridcoinClient<R> {
    pub fn from_transport(rpc: R) -> Self {
        Self { rpc }
    }

    /// The transport that makes the JSON-RPC requests.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Call `method` and unwrap the result, turning a reported error into
    /// [`CoreError::Rpc`].
    pub async fn execute<T>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.rpc.execute::<T>(method, params).await?.into_result()
    }

    /// Overview of the node, wallet and network.
    pub async fn get_info(&self) -> Result<ServerInfo, CoreError> {
        self.execute(methods::GET_INFO, Vec::new()).await
    }

    /// Current chain height.
    pub async fn get_block_count(&self) -> Result<u64, CoreError> {
        self.execute(methods::GET_BLOCK_COUNT, Vec::new()).await
    }

    pub async fn get_wallet_info(&self) -> Result<WalletInfo, CoreError> {
        self.execute(methods::GET_WALLET_INFO, Vec::new()).await
    }

    pub async fn get_best_block_hash(&self) -> Result<String, CoreError> {
        self.execute(methods::GET_BEST_BLOCK_HASH, Vec::new()).await
    }

    /// Hash of the block at `height` on the active chain.
    pub async fn get_block_hash(&self, height: u64) -> Result<String, CoreError> {
        self.execute(methods::GET_BLOCK_HASH, vec![json!(height)]).await
    }

    pub async fn get_connection_count(&self) -> Result<u32, CoreError> {
        self.execute(methods::GET_CONNECTION_COUNT, Vec::new()).await
    }

    /// Proof-of-work and proof-of-stake difficulty, keyed by
    /// `proof-of-work` / `proof-of-stake`.
    pub async fn get_difficulty(&self) -> Result<HashMap<String, f64>, CoreError> {
        self.execute(methods::GET_DIFFICULTY, Vec::new()).await
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::error::RpcError;
    use crate::rpc::mock::MockTransport;

    fn client(rpc: MockTransport) -> GridcoinClient<MockTransport> {
        GridcoinClient::from_transport(rpc)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_returns_result() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"1","result":42}"#)
            .build();
        let value: i64 = client(rpc).execute("getblockcount", Vec::new()).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_prefers_error_over_result() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"1","result":42,"error":{"code":-1,"message":"x"}}"#)
            .build();
        let err = client(rpc)
            .execute::<i64>("getblockcount", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Rpc(ref rpc) if *rpc == RpcError::new(-1, "x")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_keeps_server_error_when_result_has_wrong_shape() {
        for status in [StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR] {
            let rpc = MockTransport::builder()
                .with_reply(
                    status,
                    r#"{"id":"1","result":{"not":"a number"},"error":{"code":-8,"message":"Block height out of range"}}"#,
                )
                .build();
            let err = client(rpc)
                .execute::<u64>("getblockhash", vec![json!(99_999_999)])
                .await
                .unwrap_err();
            assert_eq!(
                err.rpc_error(),
                Some(&RpcError::new(-8, "Block height out of range")),
                "status {status}"
            );
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_maps_500_error_envelope_to_rpc_error() {
        let rpc = MockTransport::builder()
            .with_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"id":"1","error":{"code":-32601,"message":"Method not found"}}"#,
            )
            .build();
        let err = client(rpc)
            .execute::<serde_json::Value>("nosuchmethod", Vec::new())
            .await
            .unwrap_err();
        let rpc_err = err.rpc_error().expect("must be an RPC error");
        assert_eq!(rpc_err.code(), -32601);
        assert_eq!(rpc_err.message(), "Method not found");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_reports_transport_error_for_404() {
        let rpc = MockTransport::builder()
            .with_reply(StatusCode::NOT_FOUND, "<html>not found</html>")
            .build();
        let err = client(rpc)
            .execute::<u64>("getblockcount", Vec::new())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_reports_serialization_error_for_truncated_body() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"1","result":4"#)
            .build();
        let err = client(rpc)
            .execute::<u64>("getblockcount", Vec::new())
            .await
            .unwrap_err();
        assert!(err.is_serialization());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn execute_treats_500_without_envelope_as_serialization_error() {
        let rpc = MockTransport::builder()
            .with_reply(StatusCode::INTERNAL_SERVER_ERROR, "internal failure")
            .build();
        let err = client(rpc)
            .execute::<u64>("getblockcount", Vec::new())
            .await
            .unwrap_err();
        assert!(err.is_serialization());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn named_operations_send_expected_method_and_params() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"","result":{"blocks":7,"connections":3}}"#)
            .with_ok(r#"{"id":"","result":7}"#)
            .with_ok(r#"{"id":"","result":"00ab"}"#)
            .build();
        let client = client(rpc);

        let info = client.get_info().await.unwrap();
        assert_eq!(info.blocks, 7);
        assert_eq!(info.connections, 3);
        assert_eq!(client.get_block_count().await.unwrap(), 7);
        assert_eq!(client.get_block_hash(7).await.unwrap(), "00ab");

        let requests = client.rpc().requests();
        assert_eq!(requests[0].method(), "getinfo");
        assert!(requests[0].params().is_empty());
        assert_eq!(requests[1].method(), "getblockcount");
        assert_eq!(requests[2].method(), "getblockhash");
        assert_eq!(requests[2].params(), &[json!(7)]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_difficulty_decodes_map() {
        let rpc = MockTransport::builder()
            .with_ok(r#"{"id":"","result":{"proof-of-work":0.5,"proof-of-stake":9.0}}"#)
            .build();
        let difficulty = client(rpc).get_difficulty().await.unwrap();
        assert_eq!(difficulty.get("proof-of-work"), Some(&0.5));
        assert_eq!(difficulty.get("proof-of-stake"), Some(&9.0));
    }

    #[test]
    fn from_config_rejects_empty_host() {
        let config = ClientConfig::default().with_host("");
        let err = GridcoinClient::from_config(&config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }
}
