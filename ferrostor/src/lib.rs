//! # Ferrostor
//!
//! Multi-vendor storage device driver core.
//!
//! Ferrostor defines the contract every storage vendor plugin implements,
//! routes device operations to the right plugin, and translates vendor trap
//! payloads into one canonical alert model. It also retrieves SSH host keys
//! so an operator can verify a device before trusting it.
//!
//! ## Features
//!
//! - Async [`StorageDriver`] trait with a vendor/model [`DriverRegistry`]
//! - Declarative per-vendor alert field maps with mandatory field checks
//! - SSH host key retrieval via russh with MD5 fingerprints
//! - Built-in drivers: fake storage, Huawei OceanStor, Dell EMC VMAX
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ferrostor::access::InMemoryAccessInfoRepository;
//! use ferrostor::{AccessInfo, Context, DriverApi, DriverRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ferrostor::Error> {
//!     let repo = InMemoryAccessInfoRepository::with_records([AccessInfo::new(
//!         "865ffd4d-f1f7-47de-abc3-5541ef44d0c1",
//!         "fake_storage",
//!         "fake_driver",
//!     )]);
//!     let api = DriverApi::new(
//!         Arc::new(DriverRegistry::with_builtin_drivers()),
//!         Arc::new(repo),
//!     );
//!
//!     let ctx = Context::new("req-1");
//!     let volumes = api
//!         .list_volumes(&ctx, "865ffd4d-f1f7-47de-abc3-5541ef44d0c1")
//!         .await?;
//!     println!("{} volumes", volumes.len());
//!
//!     let key = api.get_ssh_key("192.168.1.1", 22).await?;
//!     println!("{} {}", key.key_type, key.fingerprint);
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod alert;
pub mod driver;
pub mod error;
pub mod platform;
pub mod transport;

// Re-export main types for convenience
pub use access::{AccessInfo, AccessInfoService};
pub use alert::{AlertModel, AlertNormalizer, RawAlert, VendorFieldMap};
pub use driver::{Context, DriverApi, StorageDriver, StorageHandle};
pub use error::{Error, Result};
pub use platform::{DriverKey, DriverRegistry};
pub use transport::{HostKeyRecord, SshConfig, fetch_host_key};
