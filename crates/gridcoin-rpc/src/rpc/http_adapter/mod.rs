//! JSON-RPC 1.0 client for Gridcoin nodes over HTTP(S).
//!
//! Implements [`RpcTransport`](super::RpcTransport) with `reqwest`: one POST
//! per call, a fixed basic-auth header and the node's status-code policy.

mod client;
mod connection;

pub use client::HttpRpcClient;
pub use connection::parse_connection;
