//! Error types for ferrostor.

use std::time::Duration;
use thiserror::Error;

/// Main error type for ferrostor operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input, rejected before any network action.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// SSH transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Alert normalization errors
    #[error("Alert error: {0}")]
    Alert(#[from] AlertError),

    /// Driver lookup and dispatch errors
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    /// Access information errors
    #[error("Access info error: {0}")]
    Access(#[from] AccessError),
}

impl Error {
    /// Build an [`Error::InvalidInput`] from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller rather than a device or driver.
    ///
    /// Request layers map these to client errors (4xx), everything else to
    /// server or device errors.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput { .. } | Error::Access(AccessError::NotFound { .. })
        )
    }
}

/// Transport layer errors (reaching a device over SSH).
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to connect to the host or complete the key exchange
    #[error("Unable to connect to {host}:{port}: {source}")]
    ConnectionFailed {
        host: String,
        port: u16,
        #[source]
        source: HandshakeError,
    },
}

/// Cause of a failed host key handshake.
#[derive(Error, Debug)]
pub enum HandshakeError {
    /// SSH protocol or socket error
    #[error("SSH error: {0}")]
    Ssh(#[from] russh::Error),

    /// The handshake did not finish in time
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The server closed the session before presenting a host key
    #[error("server did not present a host key")]
    NoHostKey,

    /// The host key could not be encoded
    #[error("host key encoding failed: {0}")]
    KeyEncoding(String),
}

/// Alert normalization errors.
#[derive(Error, Debug)]
pub enum AlertError {
    /// Mandatory vendor fields were absent from the raw alert
    #[error(
        "Failed to build alert model as some attributes missing in alert message: {}",
        .missing.join(", ")
    )]
    InvalidResults { missing: Vec<String> },

    /// A field map leaves required canonical fields without a mandatory source
    #[error(
        "Alert format '{format}' does not map required fields from mandatory sources: {}",
        .fields.join(", ")
    )]
    IncompleteFieldMap { format: String, fields: Vec<String> },
}

impl AlertError {
    /// Names of the missing fields, when the error is about missing fields.
    pub fn missing_fields(&self) -> &[String] {
        match self {
            AlertError::InvalidResults { missing } => missing,
            AlertError::IncompleteFieldMap { .. } => &[],
        }
    }
}

/// Driver layer errors (registration, lookup, unsupported operations).
#[derive(Error, Debug)]
pub enum DriverError {
    /// No driver registered for the vendor/model pair
    #[error("Driver not found for vendor '{vendor}' model '{model}'")]
    DriverNotFound { vendor: String, model: String },

    /// A driver is already registered for the vendor/model pair
    #[error("Driver already registered for vendor '{vendor}' model '{model}'")]
    AlreadyRegistered { vendor: String, model: String },

    /// The driver cannot perform the operation
    #[error("Operation '{operation}' is not supported by driver '{driver}'")]
    NotSupported { driver: String, operation: String },
}

/// Access information errors.
#[derive(Error, Debug)]
pub enum AccessError {
    /// No access info stored for the storage id
    #[error("Access information for storage {storage_id} could not be found")]
    NotFound { storage_id: String },
}

/// Result type alias using ferrostor's Error.
pub type Result<T> = std::result::Result<T, Error>;
