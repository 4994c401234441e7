//! Access info operations as exposed to the request layer.

use std::sync::Arc;

use log::info;

use super::model::{AccessInfo, AccessInfoUpdate};
use super::repository::AccessInfoRepository;
use super::validation::check_input;
use crate::driver::{Context, DriverApi};
use crate::error::{Error, Result};
use crate::transport::HostKeyRecord;

/// Show and update access info, and fetch SSH host keys.
#[derive(Clone)]
pub struct AccessInfoService {
    repository: Arc<dyn AccessInfoRepository>,
    driver_api: DriverApi,
}

impl AccessInfoService {
    /// Create the service.
    pub fn new(repository: Arc<dyn AccessInfoRepository>, driver_api: DriverApi) -> Self {
        Self {
            repository,
            driver_api,
        }
    }

    /// Show access information by storage id.
    pub async fn show(&self, _ctx: &Context, storage_id: &str) -> Result<AccessInfo> {
        self.repository.access_info_get(storage_id).await
    }

    /// Update storage access information.
    ///
    /// Access types missing from `update` are cleared.
    pub async fn update(
        &self,
        ctx: &Context,
        storage_id: &str,
        update: AccessInfoUpdate,
    ) -> Result<AccessInfo> {
        if !update.has_any_access() {
            return Err(Error::invalid_input(
                "At least one of rest_access or ssh_access is required.",
            ));
        }
        let mut access_info = self.repository.access_info_get(storage_id).await?;
        access_info.apply(update);
        self.driver_api.update_access_info(ctx, access_info).await
    }

    /// Get the remote host key for SSH.
    ///
    /// `host` and `port` are the raw request values; they are validated
    /// before any connection is attempted.
    pub async fn get_ssh_key(
        &self,
        ctx: &Context,
        host: Option<&str>,
        port: Option<&str>,
    ) -> Result<HostKeyRecord> {
        let (host, port) = check_input(host, port)?;
        info!("[{}] host:{}, port:{}", ctx, host, port);

        let ssh_key = self.driver_api.get_ssh_key(&host, port).await?;
        info!(
            "[{}] key:{}, key_type:{}, fingerprint:{}",
            ctx, ssh_key.key, ssh_key.key_type, ssh_key.fingerprint
        );
        Ok(ssh_key)
    }
}
