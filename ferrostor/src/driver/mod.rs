//! Storage driver interface.
//!
//! Every vendor/model pair is served by one [`StorageDriver`] implementation.
//! Drivers are created per operation from a [`StorageHandle`] and must not keep
//! the credentials they were handed; anything needed for a session is fetched
//! again on the next call.

mod api;
mod context;
pub mod model;

pub use api::DriverApi;
pub use context::Context;
pub use model::{Storage, StoragePool, TrapConfig, Volume};

use async_trait::async_trait;

use crate::access::AccessInfo;
use crate::alert::{AlertModel, RawAlert};
use crate::error::Result;
use crate::transport::{self, HostKeyRecord, SshConfig};

/// Identifies one managed device for the duration of a single call.
#[derive(Debug, Clone)]
pub struct StorageHandle {
    /// Opaque unique storage key.
    pub storage_id: String,

    pub vendor: String,

    pub model: String,

    /// Credentials, present only while the call that needs them runs.
    pub access_info: Option<AccessInfo>,
}

impl StorageHandle {
    /// Handle without access information.
    pub fn new(
        storage_id: impl Into<String>,
        vendor: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            storage_id: storage_id.into(),
            vendor: vendor.into(),
            model: model.into(),
            access_info: None,
        }
    }

    /// Handle built from a persisted access info record.
    pub fn from_access_info(access_info: AccessInfo) -> Self {
        Self {
            storage_id: access_info.storage_id.clone(),
            vendor: access_info.vendor.clone(),
            model: access_info.model.clone(),
            access_info: Some(access_info),
        }
    }
}

/// Trait for storage device drivers.
///
/// All operations are required; a driver that leaves one out does not
/// compile, so nothing can be registered with a missing capability.
///
/// ```compile_fail
/// use async_trait::async_trait;
/// use ferrostor::alert::{AlertModel, RawAlert};
/// use ferrostor::driver::{Context, Storage, StorageDriver, StoragePool, TrapConfig, Volume};
/// use ferrostor::{Error, Result};
///
/// struct NoClearAlert;
///
/// #[async_trait]
/// impl StorageDriver for NoClearAlert {
///     async fn get_storage(&self, _: &Context) -> Result<Storage> {
///         Err(Error::invalid_input("unused"))
///     }
///     async fn list_storage_pools(&self, _: &Context) -> Result<Vec<StoragePool>> {
///         Ok(Vec::new())
///     }
///     async fn list_volumes(&self, _: &Context) -> Result<Vec<Volume>> {
///         Ok(Vec::new())
///     }
///     async fn add_trap_config(&self, _: &Context, _: &TrapConfig) -> Result<()> {
///         Ok(())
///     }
///     async fn remove_trap_config(&self, _: &Context, _: &TrapConfig) -> Result<()> {
///         Ok(())
///     }
///     fn parse_alert(&self, _: &Context, _: &RawAlert) -> Result<AlertModel> {
///         Err(Error::invalid_input("unused"))
///     }
/// }
/// ```
#[async_trait]
pub trait StorageDriver: Send + Sync {
    /// Get storage device information from the storage system.
    async fn get_storage(&self, ctx: &Context) -> Result<Storage>;

    /// List all storage pools.
    async fn list_storage_pools(&self, ctx: &Context) -> Result<Vec<StoragePool>>;

    /// List all volumes.
    async fn list_volumes(&self, ctx: &Context) -> Result<Vec<Volume>>;

    /// Configure a trap receiver on the storage system.
    async fn add_trap_config(&self, ctx: &Context, trap_config: &TrapConfig) -> Result<()>;

    /// Remove a trap receiver configuration from the storage system.
    async fn remove_trap_config(&self, ctx: &Context, trap_config: &TrapConfig) -> Result<()>;

    /// Parse alert data received from the trap server.
    ///
    /// Delegates to the vendor's alert normalizer and returns its error
    /// unchanged.
    fn parse_alert(&self, ctx: &Context, alert: &RawAlert) -> Result<AlertModel>;

    /// Clear an alert on the storage system by its device sequence number.
    async fn clear_alert(&self, ctx: &Context, sequence_number: &str) -> Result<()>;
}

impl dyn StorageDriver {
    /// Retrieve a device's SSH host key.
    ///
    /// Shared by every driver and not overridable; see
    /// [`transport::fetch_host_key`].
    pub async fn fetch_host_key(config: &SshConfig) -> Result<HostKeyRecord> {
        transport::fetch_host_key(config).await
    }
}
