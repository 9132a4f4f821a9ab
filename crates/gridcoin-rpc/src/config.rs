//! Connection settings for a Gridcoin node.

use std::fmt;

use reqwest::Url;

use crate::error::CoreError;
use crate::rpc::parse_connection;

pub const DEFAULT_HOST: &str = "127.0.0.1";

// ==============================================================================
// Network
// ==============================================================================

/// Which chain the node runs; selects the default RPC port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn default_port(self) -> u16 {
        match self {
            Self::Mainnet => 15715,
            Self::Testnet => 25715,
        }
    }
}

// ==============================================================================
// Client Config
// ==============================================================================

/// Host, port, credentials and TLS flag for a node's RPC server.
///
/// The password must match `rpcpassword` in the node's config file and is
/// redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Connect over HTTPS. The node must be started with `-rpcssl`.
    pub secure: bool,
}

impl ClientConfig {
    /// Mainnet settings for `host` with the given credentials.
    pub fn new(host: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn for_network(network: Network) -> Self {
        Self {
            port: network.default_port(),
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    pub fn with_tls(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// `{scheme}://{host}:{port}/`, validated.
    pub fn endpoint(&self) -> Result<Url, CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::InvalidConfig("rpc host must not be empty".to_owned()));
        }
        let scheme = if self.secure { "https" } else { "http" };
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal.
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        parse_connection(&format!("{scheme}://{host}:{}/", self.port))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: Network::Mainnet.default_port(),
            user: String::new(),
            password: String::new(),
            secure: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}
