//! Native client trait for inter-module communication
//!
//! Other modules use this trait to read (and, as host, change) workspace
//! settings without going through HTTP.

use super::{
    error::SettingsError,
    model::{CallerContext, WorkspaceSetting},
};
use async_trait::async_trait;

/// Workspace settings API for inter-module communication
#[async_trait]
pub trait WorkspaceSettingsApi: Send + Sync {
    /// List every externally visible workspace setting
    async fn list_workspace_settings(&self) -> Result<Vec<WorkspaceSetting>, SettingsError>;

    /// Get a setting by resource name (`settings/<KEY>`)
    async fn get_workspace_setting(&self, name: &str) -> Result<WorkspaceSetting, SettingsError>;

    /// Replace a setting; the acting user is resolved from `caller`
    async fn set_workspace_setting(
        &self,
        caller: &CallerContext,
        setting: WorkspaceSetting,
    ) -> Result<WorkspaceSetting, SettingsError>;
}
