//! Fake storage driver.
//!
//! Synthesizes a small, deterministic inventory from the storage id so the
//! dispatch path can be exercised without a real array. Alerts use the
//! OceanStor trap format.

use async_trait::async_trait;
use log::{debug, info};

use super::huawei_oceanstor;
use crate::alert::{AlertModel, AlertNormalizer, MappedNormalizer, RawAlert};
use crate::driver::model::{ResourceStatus, StorageStatus, StorageType, VolumeType};
use crate::driver::{Context, Storage, StorageDriver, StoragePool, TrapConfig, Volume};
use crate::error::{Error, Result};

/// Vendor name the driver is registered under.
pub const VENDOR: &str = "fake_storage";

/// Model name the driver is registered under.
pub const MODEL: &str = "fake_driver";

const GIB: u64 = 1024 * 1024 * 1024;
const POOL_COUNT: usize = 2;
const VOLUMES_PER_POOL: usize = 2;
const POOL_CAPACITY: u64 = 512 * GIB;
const VOLUME_CAPACITY: u64 = 64 * GIB;
const VOLUME_USED: u64 = 16 * GIB;

/// In-memory driver returning synthetic inventory.
#[derive(Debug, Clone)]
pub struct FakeStorageDriver {
    storage_id: String,
    normalizer: MappedNormalizer,
}

impl FakeStorageDriver {
    /// Create a driver for a storage id.
    pub fn new(storage_id: impl Into<String>) -> Result<Self> {
        Ok(Self {
            storage_id: storage_id.into(),
            normalizer: MappedNormalizer::new(huawei_oceanstor::alert::field_map())?,
        })
    }

    fn pool_id(index: usize) -> String {
        format!("fake_pool_{index}")
    }

    fn pools(&self) -> Vec<StoragePool> {
        (0..POOL_COUNT)
            .map(|i| {
                let used = VOLUME_CAPACITY * VOLUMES_PER_POOL as u64;
                StoragePool {
                    name: format!("pool_{i}"),
                    storage_id: self.storage_id.clone(),
                    native_storage_pool_id: Self::pool_id(i),
                    status: ResourceStatus::Normal,
                    storage_type: StorageType::Block,
                    total_capacity: POOL_CAPACITY,
                    used_capacity: used,
                    free_capacity: POOL_CAPACITY - used,
                }
            })
            .collect()
    }

    fn volumes(&self) -> Vec<Volume> {
        (0..POOL_COUNT)
            .flat_map(|p| (0..VOLUMES_PER_POOL).map(move |v| (p, v)))
            .map(|(p, v)| Volume {
                name: format!("volume_{p}_{v}"),
                storage_id: self.storage_id.clone(),
                native_volume_id: format!("fake_volume_{}", p * VOLUMES_PER_POOL + v),
                native_storage_pool_id: Self::pool_id(p),
                status: ResourceStatus::Normal,
                volume_type: if v % 2 == 0 {
                    VolumeType::Thin
                } else {
                    VolumeType::Thick
                },
                total_capacity: VOLUME_CAPACITY,
                used_capacity: VOLUME_USED,
                free_capacity: VOLUME_CAPACITY - VOLUME_USED,
                compressed: false,
                deduplicated: false,
            })
            .collect()
    }

    fn check_trap_config(trap_config: &TrapConfig) -> Result<()> {
        if trap_config.host.is_empty() {
            return Err(Error::invalid_input("Trap receiver host is required."));
        }
        if trap_config.port == 0 {
            return Err(Error::invalid_input("Trap receiver port is invalid."));
        }
        Ok(())
    }
}

#[async_trait]
impl StorageDriver for FakeStorageDriver {
    async fn get_storage(&self, ctx: &Context) -> Result<Storage> {
        debug!("[{}] fake storage {}: get_storage", ctx, self.storage_id);
        let pools = self.pools();
        let total: u64 = pools.iter().map(|p| p.total_capacity).sum();
        let used: u64 = pools.iter().map(|p| p.used_capacity).sum();

        let serial: String = self
            .storage_id
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .take(12)
            .collect::<String>()
            .to_ascii_uppercase();

        Ok(Storage {
            name: format!("fake_storage_{serial}"),
            vendor: VENDOR.to_string(),
            model: MODEL.to_string(),
            status: StorageStatus::Normal,
            serial_number: format!("FS{serial}"),
            firmware_version: "1.0.0".to_string(),
            location: "lab".to_string(),
            description: "Synthetic storage for development and tests".to_string(),
            total_capacity: total,
            used_capacity: used,
            free_capacity: total - used,
        })
    }

    async fn list_storage_pools(&self, ctx: &Context) -> Result<Vec<StoragePool>> {
        debug!("[{}] fake storage {}: list_storage_pools", ctx, self.storage_id);
        Ok(self.pools())
    }

    async fn list_volumes(&self, ctx: &Context) -> Result<Vec<Volume>> {
        debug!("[{}] fake storage {}: list_volumes", ctx, self.storage_id);
        Ok(self.volumes())
    }

    async fn add_trap_config(&self, ctx: &Context, trap_config: &TrapConfig) -> Result<()> {
        Self::check_trap_config(trap_config)?;
        info!(
            "[{}] fake storage {}: added trap receiver {}:{}",
            ctx, self.storage_id, trap_config.host, trap_config.port
        );
        Ok(())
    }

    async fn remove_trap_config(&self, ctx: &Context, trap_config: &TrapConfig) -> Result<()> {
        Self::check_trap_config(trap_config)?;
        info!(
            "[{}] fake storage {}: removed trap receiver {}:{}",
            ctx, self.storage_id, trap_config.host, trap_config.port
        );
        Ok(())
    }

    fn parse_alert(&self, ctx: &Context, alert: &RawAlert) -> Result<AlertModel> {
        debug!(
            "[{}] fake storage {}: parsing {} alert",
            ctx,
            self.storage_id,
            self.normalizer.format()
        );
        self.normalizer.parse_alert(alert)
    }

    async fn clear_alert(&self, ctx: &Context, sequence_number: &str) -> Result<()> {
        if sequence_number.is_empty() {
            return Err(Error::invalid_input("Alert sequence number is required."));
        }
        info!(
            "[{}] fake storage {}: cleared alert {}",
            ctx, self.storage_id, sequence_number
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::model::SnmpVersion;

    const STORAGE_ID: &str = "865ffd4d-f1f7-47de-abc3-5541ef44d0c1";

    #[tokio::test]
    async fn test_get_storage() {
        let driver = FakeStorageDriver::new(STORAGE_ID).unwrap();
        let storage = driver.get_storage(&Context::default()).await.unwrap();
        assert_eq!(storage.vendor, "fake_storage");
        assert_eq!(storage.model, "fake_driver");
        assert_eq!(storage.serial_number, "FS865FFD4DF1F7");
        assert_eq!(storage.total_capacity, 1024 * GIB);
        assert_eq!(
            storage.used_capacity + storage.free_capacity,
            storage.total_capacity
        );
    }

    #[tokio::test]
    async fn test_inventory_is_consistent() {
        let driver = FakeStorageDriver::new(STORAGE_ID).unwrap();
        let ctx = Context::default();
        let pools = driver.list_storage_pools(&ctx).await.unwrap();
        let volumes = driver.list_volumes(&ctx).await.unwrap();

        assert_eq!(pools.len(), POOL_COUNT);
        assert_eq!(volumes.len(), POOL_COUNT * VOLUMES_PER_POOL);
        for volume in &volumes {
            assert_eq!(volume.storage_id, STORAGE_ID);
            assert!(
                pools
                    .iter()
                    .any(|p| p.native_storage_pool_id == volume.native_storage_pool_id)
            );
        }
        // Same id, same inventory
        assert_eq!(volumes, driver.list_volumes(&ctx).await.unwrap());
    }

    #[tokio::test]
    async fn test_trap_config_validation() {
        let driver = FakeStorageDriver::new(STORAGE_ID).unwrap();
        let ctx = Context::default();
        let good = TrapConfig::new("10.0.0.5", SnmpVersion::V2c, "public");
        driver.add_trap_config(&ctx, &good).await.unwrap();
        driver.remove_trap_config(&ctx, &good).await.unwrap();

        let bad = TrapConfig::new("", SnmpVersion::V3, "user");
        assert!(matches!(
            driver.add_trap_config(&ctx, &bad).await,
            Err(Error::InvalidInput { .. })
        ));
    }

    #[tokio::test]
    async fn test_clear_alert() {
        let driver = FakeStorageDriver::new(STORAGE_ID).unwrap();
        let ctx = Context::default();
        driver.clear_alert(&ctx, "4294967295").await.unwrap();
        assert!(driver.clear_alert(&ctx, "").await.is_err());
    }
}
