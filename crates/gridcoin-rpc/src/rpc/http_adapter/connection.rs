use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::error::CoreError;

/// Validate a node endpoint URL. Only `http` and `https` are accepted.
pub fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::InvalidConfig(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::InvalidConfig(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}

/// `Basic base64(user:password)`, marked sensitive so it stays out of logs.
pub(super) fn basic_auth_header(user: &str, password: &str) -> Result<HeaderValue, CoreError> {
    let encoded = STANDARD.encode(format!("{user}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
        .map_err(|e| CoreError::InvalidConfig(format!("invalid authorization header: {e}")))?;
    value.set_sensitive(true);
    Ok(value)
}
