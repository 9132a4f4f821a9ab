//! Typed JSON-RPC client for Gridcoin nodes.
//!
//! [`GridcoinClient`] exposes named node operations on top of an
//! [`rpc::RpcTransport`]; the default transport is [`rpc::HttpRpcClient`],
//! which speaks JSON-RPC 1.0 over HTTP(S) with basic authentication.

pub mod client;
pub mod config;
pub mod error;
pub mod rpc;
pub mod types;

pub use client::GridcoinClient;
pub use reqwest::StatusCode;

pub use config::{ClientConfig, Network};
pub use error::{CoreError, RpcError, TransportError};
pub use types::{ServerInfo, WalletInfo};
