use clap::Parser;

use gridcoin_rpc::{ClientConfig, Network};

/// gridcoin-cli: send one JSON-RPC call to a Gridcoin node and print the result.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Node hostname or IP address.
    #[arg(long, default_value = gridcoin_rpc::config::DEFAULT_HOST, env = "GRIDCOIN_RPC_HOST")]
    pub rpc_host: String,

    /// RPC port. Defaults to 15715, or 25715 with --testnet.
    #[arg(long, env = "GRIDCOIN_RPC_PORT")]
    pub rpc_port: Option<u16>,

    /// `rpcuser` from gridcoinresearch.conf.
    #[arg(long, default_value = "", env = "GRIDCOIN_RPC_USER")]
    pub rpc_user: String,

    /// `rpcpassword` from gridcoinresearch.conf.
    #[arg(long, default_value = "", env = "GRIDCOIN_RPC_PASS", hide_env_values = true)]
    pub rpc_pass: String,

    /// Connect to a testnet node.
    #[arg(long, env = "GRIDCOIN_TESTNET")]
    pub testnet: bool,

    /// Connect over HTTPS (node started with -rpcssl).
    #[arg(long, env = "GRIDCOIN_RPC_TLS")]
    pub tls: bool,

    /// RPC method name, e.g. `getinfo`.
    pub method: String,

    /// Positional parameters. Values that parse as JSON are sent as JSON,
    /// anything else as a string.
    pub params: Vec<String>,
}

impl Cli {
    pub fn network(&self) -> Network {
        if self.testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let network = self.network();
        ClientConfig::for_network(network)
            .with_host(self.rpc_host.as_str())
            .with_port(self.rpc_port.unwrap_or_else(|| network.default_port()))
            .with_credentials(self.rpc_user.as_str(), self.rpc_pass.as_str())
            .with_tls(self.tls)
    }

    pub fn rpc_params(&self) -> Vec<serde_json::Value> {
        self.params.iter().map(|raw| parse_param(raw)).collect()
    }
}

fn parse_param(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}
