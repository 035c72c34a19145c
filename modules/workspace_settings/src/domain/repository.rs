//! Repository trait for data access
//!
//! Implementations are in infra/storage.

use super::stored::StoredWorkspaceSetting;
use anyhow::Result;
use async_trait::async_trait;

/// Filter for workspace setting lookups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindWorkspaceSetting {
    /// Canonical key string (e.g. `GENERAL`); `None` matches everything
    pub name: Option<String>,
}

impl FindWorkspaceSetting {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Persistence for workspace settings
///
/// `upsert` must be atomic per key; concurrent writers are last-writer-wins.
#[async_trait]
pub trait WorkspaceSettingsRepository: Send + Sync {
    /// List settings matching the filter, in store order
    async fn list(&self, filter: &FindWorkspaceSetting) -> Result<Vec<StoredWorkspaceSetting>>;

    /// First setting matching the filter
    async fn find(&self, filter: &FindWorkspaceSetting) -> Result<Option<StoredWorkspaceSetting>>;

    /// Create or replace the value stored under `setting.key`
    async fn upsert(&self, setting: &StoredWorkspaceSetting) -> Result<StoredWorkspaceSetting>;
}
