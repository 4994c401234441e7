//! Host key records and MD5 fingerprint formatting.

use md5::{Digest, Md5};
use russh::keys::PublicKey;
use serde::Serialize;

use crate::error::HandshakeError;

/// Public host key presented by a device during the key exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostKeyRecord {
    /// Base64 of the SSH wire encoding of the key.
    pub key: String,

    /// Key algorithm name (e.g. `ssh-ed25519`, `ssh-rsa`).
    #[serde(rename = "type")]
    pub key_type: String,

    /// Colon separated MD5 digest of the raw key bytes.
    pub fingerprint: String,
}

impl HostKeyRecord {
    /// Build a record from a server public key.
    pub fn from_public_key(key: &PublicKey) -> Result<Self, HandshakeError> {
        let raw = key
            .to_bytes()
            .map_err(|e| HandshakeError::KeyEncoding(e.to_string()))?;

        // OpenSSH public key line: "<algorithm> <base64> [comment]"
        let line = key
            .to_openssh()
            .map_err(|e| HandshakeError::KeyEncoding(e.to_string()))?;
        let mut parts = line.split_whitespace();
        let (Some(key_type), Some(encoded)) = (parts.next(), parts.next()) else {
            return Err(HandshakeError::KeyEncoding(format!(
                "malformed public key line '{line}'"
            )));
        };

        Ok(Self {
            key: encoded.to_string(),
            key_type: key_type.to_string(),
            fingerprint: fingerprint(&raw),
        })
    }
}

/// MD5 fingerprint of raw key bytes, e.g. `73:d8:34:...:63`.
pub fn fingerprint(raw_key: &[u8]) -> String {
    format_fingerprint(&hex::encode(Md5::digest(raw_key)))
}

/// Group a hex digest into colon separated byte pairs.
///
/// `"abcdef"` becomes `"ab:cd:ef"`. Output is lowercase, with no leading or
/// trailing colon.
pub fn format_fingerprint(hex_digest: &str) -> String {
    let mut out = String::with_capacity(hex_digest.len() + hex_digest.len() / 2);
    for (i, c) in hex_digest.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
