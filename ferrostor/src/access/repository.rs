//! Persistence boundary for access information.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use super::model::AccessInfo;
use crate::error::{AccessError, Result};

/// Storage of access info records.
///
/// Implemented by the persistence layer; the core only reads a record for
/// the duration of one operation and writes back full records.
#[async_trait]
pub trait AccessInfoRepository: Send + Sync {
    /// Load the record for a storage id.
    ///
    /// Fails with [`AccessError::NotFound`] for unknown ids.
    async fn access_info_get(&self, storage_id: &str) -> Result<AccessInfo>;

    /// Store a full record, returning what was stored.
    async fn access_info_update(&self, access_info: AccessInfo) -> Result<AccessInfo>;
}

/// In-memory repository for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct InMemoryAccessInfoRepository {
    records: RwLock<HashMap<String, AccessInfo>>,
}

impl InMemoryAccessInfoRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given records.
    pub fn with_records(records: impl IntoIterator<Item = AccessInfo>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.storage_id.clone(), r))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AccessInfoRepository for InMemoryAccessInfoRepository {
    async fn access_info_get(&self, storage_id: &str) -> Result<AccessInfo> {
        self.records
            .read()
            .await
            .get(storage_id)
            .cloned()
            .ok_or_else(|| {
                AccessError::NotFound {
                    storage_id: storage_id.to_string(),
                }
                .into()
            })
    }

    async fn access_info_update(&self, access_info: AccessInfo) -> Result<AccessInfo> {
        debug!("Storing access info for storage {}", access_info.storage_id);
        self.records
            .write()
            .await
            .insert(access_info.storage_id.clone(), access_info.clone());
        Ok(access_info)
    }
}
