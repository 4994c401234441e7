//! Registry mapping vendor/model pairs to driver factories.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;

use super::vendors;
use crate::driver::{StorageDriver, StorageHandle};
use crate::error::{DriverError, Result};

/// Key a driver is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverKey {
    pub vendor: String,
    pub model: String,
}

impl DriverKey {
    /// Create a key for a vendor/model pair.
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for DriverKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vendor, self.model)
    }
}

/// Builds a driver instance for one call.
///
/// The handle may carry credentials; factories may use them to set up a
/// session but must not store them in the driver.
pub type DriverFactory = Arc<dyn Fn(&StorageHandle) -> Result<Box<dyn StorageDriver>> + Send + Sync>;

/// Registry of driver factories.
///
/// Registration takes `&mut self` and resolution `&self`, so once the
/// registry is shared behind an `Arc` it is read-only and needs no locking.
#[derive(Default)]
pub struct DriverRegistry {
    factories: HashMap<DriverKey, DriverFactory>,
}

impl DriverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in drivers registered.
    pub fn with_builtin_drivers() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_drivers();
        registry
    }

    /// Register built-in drivers.
    fn register_builtin_drivers(&mut self) {
        for (key, factory) in vendors::builtin() {
            self.factories.insert(key, factory);
        }
    }

    /// Register a driver factory.
    pub fn register<F>(&mut self, key: DriverKey, factory: F) -> Result<()>
    where
        F: Fn(&StorageHandle) -> Result<Box<dyn StorageDriver>> + Send + Sync + 'static,
    {
        if self.factories.contains_key(&key) {
            return Err(DriverError::AlreadyRegistered {
                vendor: key.vendor,
                model: key.model,
            }
            .into());
        }
        debug!("Registering driver '{}'", key);
        self.factories.insert(key, Arc::new(factory));
        Ok(())
    }

    /// Resolve a driver for a device without access information.
    pub fn resolve(
        &self,
        storage_id: &str,
        vendor: &str,
        model: &str,
    ) -> Result<Box<dyn StorageDriver>> {
        self.resolve_handle(&StorageHandle::new(storage_id, vendor, model))
    }

    /// Resolve a driver for a device handle.
    pub fn resolve_handle(&self, handle: &StorageHandle) -> Result<Box<dyn StorageDriver>> {
        let key = DriverKey::new(handle.vendor.as_str(), handle.model.as_str());
        let factory = self
            .factories
            .get(&key)
            .ok_or_else(|| DriverError::DriverNotFound {
                vendor: handle.vendor.clone(),
                model: handle.model.clone(),
            })?;
        factory(handle)
    }

    /// Check if a driver is registered for a vendor/model pair.
    pub fn contains(&self, vendor: &str, model: &str) -> bool {
        self.factories.contains_key(&DriverKey::new(vendor, model))
    }

    /// List all registered keys, sorted.
    pub fn keys(&self) -> Vec<&DriverKey> {
        let mut keys: Vec<&DriverKey> = self.factories.keys().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("drivers", &self.keys())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::platform::vendors::fake_storage::FakeStorageDriver;

    #[test]
    fn test_builtin_drivers() {
        let registry = DriverRegistry::with_builtin_drivers();
        assert!(registry.contains("fake_storage", "fake_driver"));
        assert!(registry.contains("huawei", "oceanstor"));
        assert!(registry.contains("dellemc", "vmax"));
        assert_eq!(registry.keys().len(), 3);
    }

    #[test]
    fn test_resolve_unknown_driver() {
        let registry = DriverRegistry::with_builtin_drivers();
        match registry.resolve("s1", "acme", "x1") {
            Err(Error::Driver(DriverError::DriverNotFound { vendor, model })) => {
                assert_eq!(vendor, "acme");
                assert_eq!(model, "x1");
            }
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("expected DriverNotFound"),
        }
    }

    #[test]
    fn test_resolved_driver_is_bound_to_storage() {
        let registry = DriverRegistry::with_builtin_drivers();
        let driver = registry
            .resolve("865ffd4d-f1f7-47de-abc3-5541ef44d0c1", "fake_storage", "fake_driver")
            .unwrap();
        let storage =
            tokio_test::block_on(driver.get_storage(&crate::Context::default())).unwrap();
        assert_eq!(storage.serial_number, "FS865FFD4DF1F7");
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = DriverRegistry::with_builtin_drivers();
        assert!(!registry.contains("Huawei", "oceanstor"));
        assert!(registry.resolve("s1", "huawei", "OceanStor").is_err());
    }

    #[test]
    fn test_register_custom_and_duplicate() {
        let mut registry = DriverRegistry::new();
        let key = DriverKey::new("acme", "x1");
        registry
            .register(key.clone(), |h| Ok(Box::new(FakeStorageDriver::new(&h.storage_id)?)))
            .unwrap();
        assert!(registry.resolve("s1", "acme", "x1").is_ok());

        let err = registry
            .register(key, |h| Ok(Box::new(FakeStorageDriver::new(&h.storage_id)?)))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Driver(DriverError::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn test_factory_error_propagates() {
        let mut registry = DriverRegistry::new();
        registry
            .register(DriverKey::new("acme", "x1"), |h| {
                Err(Error::invalid_input(format!("no access for {}", h.storage_id)))
            })
            .unwrap();
        assert!(matches!(
            registry.resolve("s9", "acme", "x1"),
            Err(Error::InvalidInput { .. })
        ));
    }
}
