//! In-memory repository
//!
//! Keeps insertion order, which is also the order `list` returns.

use crate::domain::repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
use crate::domain::stored::StoredWorkspaceSetting;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Default)]
pub struct InMemoryWorkspaceSettingsRepository {
    settings: RwLock<Vec<StoredWorkspaceSetting>>,
}

impl InMemoryWorkspaceSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `settings`, in the given order
    pub fn with_settings(settings: impl IntoIterator<Item = StoredWorkspaceSetting>) -> Self {
        Self {
            settings: RwLock::new(settings.into_iter().collect()),
        }
    }

    fn matches(filter: &FindWorkspaceSetting, setting: &StoredWorkspaceSetting) -> bool {
        filter
            .name
            .as_deref()
            .map_or(true, |name| name == setting.key.as_str())
    }
}

#[async_trait]
impl WorkspaceSettingsRepository for InMemoryWorkspaceSettingsRepository {
    async fn list(&self, filter: &FindWorkspaceSetting) -> Result<Vec<StoredWorkspaceSetting>> {
        Ok(self
            .settings
            .read()
            .iter()
            .filter(|setting| Self::matches(filter, setting))
            .cloned()
            .collect())
    }

    async fn find(&self, filter: &FindWorkspaceSetting) -> Result<Option<StoredWorkspaceSetting>> {
        Ok(self
            .settings
            .read()
            .iter()
            .find(|setting| Self::matches(filter, setting))
            .cloned())
    }

    async fn upsert(&self, setting: &StoredWorkspaceSetting) -> Result<StoredWorkspaceSetting> {
        let mut settings = self.settings.write();
        match settings.iter_mut().find(|existing| existing.key == setting.key) {
            Some(existing) => *existing = setting.clone(),
            None => settings.push(setting.clone()),
        }
        Ok(setting.clone())
    }
}
