//! Access information for managed devices.
//!
//! Records are owned by the persistence layer behind
//! [`AccessInfoRepository`]. They are loaded for a single operation and never
//! kept in memory afterwards.

mod model;
mod repository;
mod service;
pub mod validation;

pub use model::{AccessInfo, AccessInfoUpdate, ProtocolAccess, SshAccess};
pub use repository::{AccessInfoRepository, InMemoryAccessInfoRepository};
pub use service::AccessInfoService;
