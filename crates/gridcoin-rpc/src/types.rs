//! Result shapes for the node's overview methods.
//!
//! Field names follow the node's JSON keys. Missing fields fall back to their
//! defaults since older and newer node releases report different subsets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ==============================================================================
// Server Info
// ==============================================================================

/// Result of `getinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    pub version: String,
    pub minor_version: i32,
    #[serde(rename = "protocolversion")]
    pub protocol_version: i32,
    #[serde(rename = "walletversion")]
    pub wallet_version: i32,
    pub balance: f64,
    #[serde(rename = "newmint")]
    pub new_mint: f64,
    pub stake: f64,
    pub blocks: u64,
    #[serde(rename = "timeoffset")]
    pub time_offset: i64,
    #[serde(rename = "moneysupply")]
    pub money_supply: f64,
    pub connections: u32,
    pub proxy: String,
    #[serde(rename = "ip")]
    pub ip_address: String,
    /// Keyed by `proof-of-work` / `proof-of-stake`.
    pub difficulty: HashMap<String, f64>,
    pub testnet: bool,
    #[serde(rename = "keypoololdest")]
    pub key_pool_oldest: i64,
    #[serde(rename = "keypoolsize")]
    pub key_pool_size: u32,
    #[serde(rename = "paytxfee")]
    pub pay_tx_fee: f64,
    #[serde(rename = "mininput")]
    pub min_input: f64,
    /// Absent unless the wallet is encrypted.
    pub unlocked_until: Option<i64>,
    pub errors: String,
}

// ==============================================================================
// Wallet Info
// ==============================================================================

/// Result of `getwalletinfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletInfo {
    #[serde(rename = "walletversion")]
    pub wallet_version: i32,
    pub balance: f64,
    #[serde(rename = "newmint")]
    pub new_mint: f64,
    pub stake: f64,
    #[serde(rename = "keypoololdest")]
    pub key_pool_oldest: i64,
    #[serde(rename = "keypoolsize")]
    pub key_pool_size: u32,
    pub unlocked_until: Option<i64>,
}
