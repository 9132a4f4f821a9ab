use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::header::{self, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::ClientConfig;
use crate::error::{CoreError, TransportError};

use super::super::protocol::{check_status, decode_body, Request, Response};
use super::super::RpcTransport;
use super::connection::{basic_auth_header, parse_connection};

const USER_AGENT: &str = concat!("gridcoin-rpc/", env!("CARGO_PKG_VERSION"));

/// Gridcoin JSON-RPC client over HTTP(S).
///
/// Every request is a single POST to the endpoint root carrying the same
/// basic-auth header. The header can be swapped with
/// [`set_credentials`](Self::set_credentials); requests already sent keep the
/// header they were built with.
#[derive(Debug)]
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: Url,
    auth: RwLock<HeaderValue>,
}

impl HttpRpcClient {
    /// Create a client for the endpoint described by `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, CoreError> {
        let url = config.endpoint()?;
        Self::from_url(url.as_str(), &config.user, &config.password)
    }

    /// Create a client for an explicit `http://` or `https://` URL.
    pub fn from_url(connection: &str, user: &str, password: &str) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| CoreError::InvalidConfig(format!("build HTTP client: {e}")))?;
        Self::with_client(client, connection, user, password)
    }

    /// Reuse a caller-built `reqwest::Client`, e.g. one configured with a
    /// request timeout.
    pub fn with_client(
        client: reqwest::Client,
        connection: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, CoreError> {
        let url = parse_connection(connection)?;
        let auth = basic_auth_header(user, password)?;
        Ok(Self {
            client,
            url,
            auth: RwLock::new(auth),
        })
    }

    /// Replace the credentials used by all subsequent requests.
    pub fn set_credentials(&self, user: &str, password: &str) -> Result<(), CoreError> {
        let auth = basic_auth_header(user, password)?;
        *self.auth.write().unwrap_or_else(PoisonError::into_inner) = auth;
        debug!(rpc.url = %self.url, "rpc credentials replaced");
        Ok(())
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    fn auth_header(&self) -> HeaderValue {
        self.auth
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send<T>(&self, request: Request) -> Result<Response<T>, CoreError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        debug!(
            rpc.id = request.id(),
            rpc.method = request.method(),
            rpc.params = request.params().len(),
            "rpc call"
        );

        // The node expects no path component; the endpoint is the root URL.
        let response = self
            .client
            .post(self.url.clone())
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::AUTHORIZATION, self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(TransportError::Network)?;
        let status = response.status();

        if let Err(err) = check_status(status) {
            warn!(
                rpc.id = request.id(),
                rpc.method = request.method(),
                %status,
                "rpc call rejected by HTTP status"
            );
            return Err(err.into());
        }

        let body = response.text().await.map_err(TransportError::Network)?;
        debug!(rpc.id = request.id(), rpc.method = request.method(), %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = request.id(), rpc.method = request.method(), body = %body, "rpc response body");

        decode_body(&body)
    }
}
