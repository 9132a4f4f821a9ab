//! Method names understood by the Gridcoin node.

pub const GET_INFO: &str = "getinfo";
pub const GET_BLOCK_COUNT: &str = "getblockcount";
pub const GET_WALLET_INFO: &str = "getwalletinfo";
pub const GET_BEST_BLOCK_HASH: &str = "getbestblockhash";
pub const GET_BLOCK_HASH: &str = "getblockhash";
pub const GET_CONNECTION_COUNT: &str = "getconnectioncount";
pub const GET_DIFFICULTY: &str = "getdifficulty";
