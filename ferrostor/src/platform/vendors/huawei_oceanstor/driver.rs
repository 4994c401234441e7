//! Huawei OceanStor driver.
//!
//! Inventory, trap receiver configuration and alarm clearing go through the
//! OceanStor REST API, which this crate does not speak; those operations
//! report [`DriverError::NotSupported`]. Alert parsing works from the trap
//! payload alone.

use async_trait::async_trait;
use log::debug;

use super::alert;
use crate::alert::{AlertModel, AlertNormalizer, MappedNormalizer, RawAlert};
use crate::driver::{Context, Storage, StorageDriver, StoragePool, TrapConfig, Volume};
use crate::error::{DriverError, Result};

/// Vendor name the driver is registered under.
pub const VENDOR: &str = "huawei";

/// Model name the driver is registered under.
pub const MODEL: &str = "oceanstor";

/// Huawei OceanStor storage driver.
#[derive(Debug, Clone)]
pub struct OceanStorDriver {
    storage_id: String,
    normalizer: MappedNormalizer,
}

impl OceanStorDriver {
    /// Create a driver for a storage id.
    pub fn new(storage_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            storage_id: storage_id.into(),
            normalizer: MappedNormalizer::new(alert::field_map())?,
        })
    }

    fn not_supported(operation: &str) -> crate::Error {
        DriverError::NotSupported {
            driver: format!("{VENDOR} {MODEL}"),
            operation: operation.to_string(),
        }
        .into()
    }
}

#[async_trait]
impl StorageDriver for OceanStorDriver {
    async fn get_storage(&self, _ctx: &Context) -> Result<Storage> {
        Err(Self::not_supported("get_storage"))
    }

    async fn list_storage_pools(&self, _ctx: &Context) -> Result<Vec<StoragePool>> {
        Err(Self::not_supported("list_storage_pools"))
    }

    async fn list_volumes(&self, _ctx: &Context) -> Result<Vec<Volume>> {
        Err(Self::not_supported("list_volumes"))
    }

    async fn add_trap_config(&self, _ctx: &Context, _trap_config: &TrapConfig) -> Result<()> {
        Err(Self::not_supported("add_trap_config"))
    }

    async fn remove_trap_config(&self, _ctx: &Context, _trap_config: &TrapConfig) -> Result<()> {
        Err(Self::not_supported("remove_trap_config"))
    }

    fn parse_alert(&self, ctx: &Context, alert: &RawAlert) -> Result<AlertModel> {
        debug!(
            "[{}] OceanStor {}: parsing {} alert",
            ctx,
            self.storage_id,
            self.normalizer.format()
        );
        self.normalizer.parse_alert(alert)
    }

    async fn clear_alert(&self, _ctx: &Context, _sequence_number: &str) -> Result<()> {
        Err(Self::not_supported("clear_alert"))
    }
}
