//! SSH transport layer wrapping russh.
//!
//! This module provides the host key handshake used to let an operator verify
//! a device's identity before any credentials are sent to it.

pub mod config;
mod fingerprint;
mod ssh;

pub use config::SshConfig;
pub use fingerprint::{HostKeyRecord, fingerprint, format_fingerprint};
pub use ssh::fetch_host_key;
