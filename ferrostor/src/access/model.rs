//! Access information records.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::Serialize;

/// Credentials and endpoint for one protocol.
///
/// The password is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolAccess {
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
}

impl ProtocolAccess {
    /// Create access details for a host.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// SSH access details, including the host key the operator accepted.
#[derive(Debug, Clone, Serialize)]
pub struct SshAccess {
    #[serde(flatten)]
    pub access: ProtocolAccess,

    /// Base64 host key confirmed through its fingerprint.
    pub host_key: Option<String>,
}

impl SshAccess {
    /// SSH access without a pinned host key.
    pub fn new(access: ProtocolAccess) -> Self {
        Self {
            access,
            host_key: None,
        }
    }

    /// Pin the host key.
    pub fn with_host_key(mut self, host_key: impl Into<String>) -> Self {
        self.host_key = Some(host_key.into());
        self
    }
}

/// How a storage device is reached.
#[derive(Debug, Clone, Serialize)]
pub struct AccessInfo {
    pub storage_id: String,
    pub vendor: String,
    pub model: String,
    pub rest_access: Option<ProtocolAccess>,
    pub ssh_access: Option<SshAccess>,
    pub extra_attributes: Option<BTreeMap<String, String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl AccessInfo {
    /// Create a record with no access configured yet.
    pub fn new(
        storage_id: impl Into<String>,
        vendor: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            storage_id: storage_id.into(),
            vendor: vendor.into(),
            model: model.into(),
            rest_access: None,
            ssh_access: None,
            extra_attributes: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set REST access.
    pub fn with_rest_access(mut self, access: ProtocolAccess) -> Self {
        self.rest_access = Some(access);
        self
    }

    /// Set SSH access.
    pub fn with_ssh_access(mut self, access: SshAccess) -> Self {
        self.ssh_access = Some(access);
        self
    }

    /// Add an extra attribute.
    pub fn with_extra_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Apply a partial update.
    ///
    /// Access types left out of the update are cleared; extra attributes are
    /// only replaced when the update carries them.
    pub fn apply(&mut self, update: AccessInfoUpdate) {
        self.rest_access = update.rest_access;
        self.ssh_access = update.ssh_access;
        if let Some(extra) = update.extra_attributes {
            self.extra_attributes = Some(extra);
        }
    }
}

/// Partial update of an [`AccessInfo`].
///
/// `None` for an access type means "clear", not "unchanged".
#[derive(Debug, Clone, Default)]
pub struct AccessInfoUpdate {
    pub rest_access: Option<ProtocolAccess>,
    pub ssh_access: Option<SshAccess>,
    pub extra_attributes: Option<BTreeMap<String, String>>,
}

impl AccessInfoUpdate {
    /// Whether the update leaves at least one access type configured.
    pub fn has_any_access(&self) -> bool {
        self.rest_access.is_some() || self.ssh_access.is_some()
    }
}
