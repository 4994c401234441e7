//! Built-in vendor drivers.

pub mod dellemc_vmax;
pub mod fake_storage;
pub mod huawei_oceanstor;

use std::sync::Arc;

use super::registry::{DriverFactory, DriverKey};
use crate::driver::{StorageDriver, StorageHandle};
use crate::error::Result;

/// Factories for every built-in driver.
pub(crate) fn builtin() -> Vec<(DriverKey, DriverFactory)> {
    vec![
        (
            DriverKey::new(fake_storage::VENDOR, fake_storage::MODEL),
            Arc::new(|h: &StorageHandle| -> Result<Box<dyn StorageDriver>> {
                Ok(Box::new(fake_storage::FakeStorageDriver::new(&h.storage_id)?))
            }),
        ),
        (
            DriverKey::new(huawei_oceanstor::VENDOR, huawei_oceanstor::MODEL),
            Arc::new(|h: &StorageHandle| -> Result<Box<dyn StorageDriver>> {
                Ok(Box::new(huawei_oceanstor::OceanStorDriver::new(&h.storage_id)?))
            }),
        ),
        (
            DriverKey::new(dellemc_vmax::VENDOR, dellemc_vmax::MODEL),
            Arc::new(|h: &StorageHandle| -> Result<Box<dyn StorageDriver>> {
                Ok(Box::new(dellemc_vmax::VmaxDriver::new(&h.storage_id)?))
            }),
        ),
    ]
}
