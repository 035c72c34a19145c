//! Domain service - business logic orchestration

use super::caller::CallerResolver;
use super::codec::{setting_to_store, setting_to_wire, UnmatchedKeyPolicy};
use super::key::parse_resource_name;
use super::repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
use crate::contract::{CallerContext, Role, SettingsError, WorkspaceSetting};
use std::sync::Arc;

/// Deployment policy the service enforces on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceOptions {
    /// Demo deployments treat workspace settings as read-only
    pub demo_mode: bool,
    pub unmatched_key_policy: UnmatchedKeyPolicy,
}

/// Domain service for workspace settings
pub struct Service {
    repo: Arc<dyn WorkspaceSettingsRepository>,
    callers: Arc<dyn CallerResolver>,
    options: ServiceOptions,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        repo: Arc<dyn WorkspaceSettingsRepository>,
        callers: Arc<dyn CallerResolver>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            repo,
            callers,
            options,
        }
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// List every externally visible setting, in store order
    pub async fn list_workspace_settings(&self) -> Result<Vec<WorkspaceSetting>, SettingsError> {
        tracing::debug!("listing workspace settings");

        let settings = self
            .repo
            .list(&FindWorkspaceSetting::all())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to list workspace settings");
                SettingsError::internal("failed to list workspace settings")
            })?;

        Ok(settings
            .into_iter()
            .filter(|setting| setting.key.is_listed())
            .map(setting_to_wire)
            .collect())
    }

    /// Get a single setting by resource name
    pub async fn get_workspace_setting(&self, name: &str) -> Result<WorkspaceSetting, SettingsError> {
        let key = parse_resource_name(name)?;
        tracing::debug!(key = %key, "getting workspace setting");

        let setting = self
            .repo
            .find(&FindWorkspaceSetting::by_name(key.as_str()))
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "failed to get workspace setting");
                SettingsError::internal("failed to get workspace setting")
            })?
            .ok_or_else(|| SettingsError::NotFound {
                name: key.resource_name(),
            })?;

        Ok(setting_to_wire(setting))
    }

    /// Replace a setting on behalf of the caller
    ///
    /// Returns the wire form of what the store persisted, not the request.
    pub async fn set_workspace_setting(
        &self,
        caller: &CallerContext,
        setting: WorkspaceSetting,
    ) -> Result<WorkspaceSetting, SettingsError> {
        if self.options.demo_mode {
            tracing::warn!(name = %setting.name, "refusing workspace setting change in demo mode");
            return Err(SettingsError::invalid_argument(
                "setting workspace setting is not allowed in demo mode",
            ));
        }

        let user = self.callers.current_user(caller).await.map_err(|e| {
            tracing::error!(error = %e, "failed to resolve current user");
            SettingsError::internal("failed to get current user")
        })?;
        if user.role != Role::Host {
            tracing::warn!(
                user_id = user.id,
                username = %user.username,
                "non-host user attempted to change workspace settings"
            );
            return Err(SettingsError::PermissionDenied);
        }

        let key = parse_resource_name(&setting.name)?;
        let stored = setting_to_store(key, setting, self.options.unmatched_key_policy)?;

        let persisted = self.repo.upsert(&stored).await.map_err(|e| {
            tracing::error!(key = %key, error = %e, "failed to upsert workspace setting");
            SettingsError::internal("failed to upsert workspace setting")
        })?;

        tracing::info!(key = %key, user_id = user.id, "workspace setting updated");
        Ok(setting_to_wire(persisted))
    }
}
