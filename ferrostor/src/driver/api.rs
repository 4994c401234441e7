//! Dispatcher routing device operations to the registered drivers.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};

use super::{Context, Storage, StorageDriver, StorageHandle, StoragePool, TrapConfig, Volume};
use crate::access::{AccessInfo, AccessInfoRepository};
use crate::alert::{AlertModel, RawAlert};
use crate::error::{DriverError, Result};
use crate::platform::DriverRegistry;
use crate::transport::config::DEFAULT_TIMEOUT;
use crate::transport::{HostKeyRecord, SshConfig};

/// Entry point for device operations.
///
/// Each call loads the device's access info, resolves a driver for it, runs
/// the operation and drops both again. Nothing is cached between calls, so
/// calls may run concurrently without coordination.
#[derive(Clone)]
pub struct DriverApi {
    registry: Arc<DriverRegistry>,
    access_info: Arc<dyn AccessInfoRepository>,
    ssh_timeout: Duration,
}

impl DriverApi {
    /// Create a dispatcher over a registry and an access info store.
    pub fn new(registry: Arc<DriverRegistry>, access_info: Arc<dyn AccessInfoRepository>) -> Self {
        Self {
            registry,
            access_info,
            ssh_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the bound for host key handshakes.
    pub fn with_ssh_timeout(mut self, timeout: Duration) -> Self {
        self.ssh_timeout = timeout;
        self
    }

    async fn driver_for(&self, ctx: &Context, storage_id: &str) -> Result<Box<dyn StorageDriver>> {
        let access_info = self.access_info.access_info_get(storage_id).await?;
        let handle = StorageHandle::from_access_info(access_info);
        debug!(
            "[{}] Dispatching storage {} to driver '{} {}'",
            ctx, handle.storage_id, handle.vendor, handle.model
        );
        self.registry.resolve_handle(&handle)
    }

    /// Get storage device information.
    pub async fn get_storage(&self, ctx: &Context, storage_id: &str) -> Result<Storage> {
        self.driver_for(ctx, storage_id).await?.get_storage(ctx).await
    }

    /// List storage pools.
    pub async fn list_storage_pools(
        &self,
        ctx: &Context,
        storage_id: &str,
    ) -> Result<Vec<StoragePool>> {
        self.driver_for(ctx, storage_id)
            .await?
            .list_storage_pools(ctx)
            .await
    }

    /// List volumes.
    pub async fn list_volumes(&self, ctx: &Context, storage_id: &str) -> Result<Vec<Volume>> {
        self.driver_for(ctx, storage_id).await?.list_volumes(ctx).await
    }

    /// Configure a trap receiver on a device.
    pub async fn add_trap_config(
        &self,
        ctx: &Context,
        storage_id: &str,
        trap_config: &TrapConfig,
    ) -> Result<()> {
        self.driver_for(ctx, storage_id)
            .await?
            .add_trap_config(ctx, trap_config)
            .await
    }

    /// Remove a trap receiver from a device.
    pub async fn remove_trap_config(
        &self,
        ctx: &Context,
        storage_id: &str,
        trap_config: &TrapConfig,
    ) -> Result<()> {
        self.driver_for(ctx, storage_id)
            .await?
            .remove_trap_config(ctx, trap_config)
            .await
    }

    /// Normalize a trap received for a device.
    pub async fn parse_alert(
        &self,
        ctx: &Context,
        storage_id: &str,
        alert: &RawAlert,
    ) -> Result<AlertModel> {
        self.driver_for(ctx, storage_id).await?.parse_alert(ctx, alert)
    }

    /// Clear an alert on a device.
    pub async fn clear_alert(
        &self,
        ctx: &Context,
        storage_id: &str,
        sequence_number: &str,
    ) -> Result<()> {
        self.driver_for(ctx, storage_id)
            .await?
            .clear_alert(ctx, sequence_number)
            .await
    }

    /// Retrieve a device's SSH host key. Does not involve any driver.
    pub async fn get_ssh_key(&self, host: &str, port: u16) -> Result<HostKeyRecord> {
        let config = SshConfig::new(host).port(port).timeout(self.ssh_timeout);
        <dyn StorageDriver>::fetch_host_key(&config).await
    }

    /// Persist updated access info.
    ///
    /// Rejects records whose vendor/model has no registered driver.
    pub async fn update_access_info(
        &self,
        ctx: &Context,
        access_info: AccessInfo,
    ) -> Result<AccessInfo> {
        if !self
            .registry
            .contains(&access_info.vendor, &access_info.model)
        {
            return Err(DriverError::DriverNotFound {
                vendor: access_info.vendor,
                model: access_info.model,
            }
            .into());
        }
        info!(
            "[{}] Updating access info for storage {}",
            ctx, access_info.storage_id
        );
        self.access_info.access_info_update(access_info).await
    }
}
