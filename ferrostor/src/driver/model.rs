//! Inventory resources returned by storage drivers.

use serde::{Deserialize, Serialize};

/// Overall health of a storage system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageStatus {
    Normal,
    Offline,
    Abnormal,
}

/// Health of a pool or volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Normal,
    Offline,
    Abnormal,
    Unknown,
}

/// Kind of storage a pool provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Block,
    File,
    Unified,
}

/// Volume provisioning type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeType {
    Thin,
    Thick,
}

/// A storage system as reported by its driver. Capacities are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub name: String,
    pub vendor: String,
    pub model: String,
    pub status: StorageStatus,
    pub serial_number: String,
    pub firmware_version: String,
    pub location: String,
    pub description: String,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: u64,
}

/// A storage pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePool {
    pub name: String,
    pub storage_id: String,
    pub native_storage_pool_id: String,
    pub status: ResourceStatus,
    pub storage_type: StorageType,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: u64,
}

/// A volume (LUN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub storage_id: String,
    pub native_volume_id: String,
    pub native_storage_pool_id: String,
    pub status: ResourceStatus,
    #[serde(rename = "type")]
    pub volume_type: VolumeType,
    pub total_capacity: u64,
    pub used_capacity: u64,
    pub free_capacity: u64,
    pub compressed: bool,
    pub deduplicated: bool,
}

/// SNMP version used by a trap receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnmpVersion {
    V2c,
    V3,
}

/// Trap receiver configuration pushed to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapConfig {
    /// Receiver address.
    pub host: String,

    /// Receiver UDP port.
    pub port: u16,

    pub version: SnmpVersion,

    /// Community string (v2c) or user name (v3).
    pub community: String,
}

impl TrapConfig {
    /// Receiver with the standard trap port 162.
    pub fn new(host: impl Into<String>, version: SnmpVersion, community: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 162,
            version,
            community: community.into(),
        }
    }
}
