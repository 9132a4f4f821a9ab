mod cli;

use clap::Parser;
use eyre::{eyre, WrapErr};

use gridcoin_rpc::{CoreError, GridcoinClient, TransportError};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_level(true)
        .init();

    let config = args.client_config();
    tracing::debug!(?config, method = %args.method, "connecting to Gridcoin RPC");
    let client = GridcoinClient::from_config(&config).context("build RPC client")?;

    let result: serde_json::Value = client
        .execute(&args.method, args.rpc_params())
        .await
        .map_err(|err| eyre!(describe_error(&err)))
        .wrap_err_with(|| format!("while calling `{}`", args.method))?;

    println!("{}", render_result(&result)?);

    Ok(())
}

/// Pretty JSON for every result, strings included.
fn render_result(result: &serde_json::Value) -> eyre::Result<String> {
    serde_json::to_string_pretty(result).context("render result")
}

/// One line naming the failure kind, plus a hint for the common cases.
fn describe_error(err: &CoreError) -> String {
    match err {
        CoreError::Transport(TransportError::Network(source)) => {
            format!("network error: {source}\nhint: verify the node is running with server=1 and the host/port are reachable")
        }
        CoreError::Transport(TransportError::Status { status }) => {
            let mut message = format!("request error: HTTP {status}");
            if status.as_u16() == 401 || status.as_u16() == 403 {
                message.push_str("\nhint: authentication failed; verify --rpc-user/--rpc-pass");
            }
            message
        }
        CoreError::Serialization { source, .. } => {
            format!("serialization format error: {source}")
        }
        CoreError::Rpc(rpc) => {
            format!("RPC error (code {}): {}", rpc.code(), rpc.message())
        }
        other => other.to_string(),
    }
}
