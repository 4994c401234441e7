//! Input checks for host key requests.
//!
//! These run before any network action; anything rejected here surfaces as
//! [`Error::InvalidInput`](crate::Error::InvalidInput).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::transport::config::DEFAULT_SSH_PORT;

/// Longest accepted host name.
pub const MAX_HOST_LEN: usize = 255;

static HOST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\-_.:]+$").expect("host pattern is valid"));

/// Validate a host name or address.
pub fn check_host(host: Option<&str>) -> Result<&str> {
    let host = host.ok_or_else(|| Error::invalid_input("Query parameter host is required."))?;
    if host.len() > MAX_HOST_LEN || !HOST_PATTERN.is_match(host) {
        return Err(Error::invalid_input("Host is invalid."));
    }
    Ok(host)
}

/// Parse an optional port, defaulting to 22.
pub fn check_port(port: Option<&str>) -> Result<u16> {
    let Some(port) = port else {
        return Ok(DEFAULT_SSH_PORT);
    };
    port.trim()
        .parse::<i64>()
        .ok()
        .and_then(|p| u16::try_from(p).ok())
        .ok_or_else(|| Error::invalid_input("Port is invalid."))
}

/// Validate host and port as received from a request.
pub fn check_input(host: Option<&str>, port: Option<&str>) -> Result<(String, u16)> {
    let host = check_host(host)?;
    let port = check_port(port)?;
    Ok((host.to_string(), port))
}
