//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{CallerContext, SettingsError, WorkspaceSetting, WorkspaceSettingsApi};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl WorkspaceSettingsApi for NativeClient {
    async fn list_workspace_settings(&self) -> Result<Vec<WorkspaceSetting>, SettingsError> {
        self.service.list_workspace_settings().await
    }

    async fn get_workspace_setting(&self, name: &str) -> Result<WorkspaceSetting, SettingsError> {
        self.service.get_workspace_setting(name).await
    }

    async fn set_workspace_setting(
        &self,
        caller: &CallerContext,
        setting: WorkspaceSetting,
    ) -> Result<WorkspaceSetting, SettingsError> {
        self.service.set_workspace_setting(caller, setting).await
    }
}
