//! Common test utilities: mock store, mock caller resolver, fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use workspace_settings::contract::*;
use workspace_settings::domain::repository::{FindWorkspaceSetting, WorkspaceSettingsRepository};
use workspace_settings::domain::stored::*;
use workspace_settings::domain::{CallerResolver, Service, ServiceOptions, SettingKey};

pub fn print_test_header(test_name: &str, purpose: &str) {
    println!("\n🧪 TEST: {}", test_name);
    println!("📋 PURPOSE: {}", purpose);
}

// ===== Store mock =====

/// Store mock that records calls and can be told to fail or to rewrite what
/// it persists
#[derive(Default)]
pub struct MockSettingsRepo {
    data: RwLock<Vec<StoredWorkspaceSetting>>,
    upserted: RwLock<Vec<StoredWorkspaceSetting>>,
    persist_override: RwLock<Option<StoredWorkspaceSetting>>,
    fail: RwLock<bool>,
    pub list_calls: AtomicUsize,
    pub find_calls: AtomicUsize,
    pub upsert_calls: AtomicUsize,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Vec<StoredWorkspaceSetting>) -> Self {
        let repo = Self::new();
        *repo.data.write() = settings;
        repo
    }

    /// Every call fails from now on
    pub fn fail_all(&self) {
        *self.fail.write() = true;
    }

    /// `upsert` persists and returns `setting` instead of its argument
    pub fn persist_instead(&self, setting: StoredWorkspaceSetting) {
        *self.persist_override.write() = Some(setting);
    }

    pub fn upserted(&self) -> Vec<StoredWorkspaceSetting> {
        self.upserted.read().clone()
    }

    pub fn store_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.find_calls.load(Ordering::SeqCst)
            + self.upsert_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> anyhow::Result<()> {
        if *self.fail.read() {
            anyhow::bail!("database is locked");
        }
        Ok(())
    }
}

#[async_trait]
impl WorkspaceSettingsRepository for MockSettingsRepo {
    async fn list(&self, filter: &FindWorkspaceSetting) -> anyhow::Result<Vec<StoredWorkspaceSetting>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .data
            .read()
            .iter()
            .filter(|s| filter.name.as_deref().map_or(true, |n| n == s.key.as_str()))
            .cloned()
            .collect())
    }

    async fn find(&self, filter: &FindWorkspaceSetting) -> anyhow::Result<Option<StoredWorkspaceSetting>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self
            .data
            .read()
            .iter()
            .find(|s| filter.name.as_deref().map_or(true, |n| n == s.key.as_str()))
            .cloned())
    }

    async fn upsert(&self, setting: &StoredWorkspaceSetting) -> anyhow::Result<StoredWorkspaceSetting> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.upserted.write().push(setting.clone());

        let persisted = self
            .persist_override
            .read()
            .clone()
            .unwrap_or_else(|| setting.clone());

        let mut data = self.data.write();
        match data.iter_mut().find(|s| s.key == persisted.key) {
            Some(existing) => *existing = persisted.clone(),
            None => data.push(persisted.clone()),
        }
        Ok(persisted)
    }
}

// ===== Caller resolver mock =====

pub struct MockCallerResolver {
    user: Option<CurrentUser>,
    pub calls: AtomicUsize,
}

impl MockCallerResolver {
    pub fn as_role(role: Role) -> Self {
        Self {
            user: Some(CurrentUser {
                id: 1,
                username: format!("{:?}", role).to_lowercase(),
                role,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolution always fails (no session)
    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CallerResolver for MockCallerResolver {
    async fn current_user(&self, _caller: &CallerContext) -> anyhow::Result<CurrentUser> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user
            .clone()
            .ok_or_else(|| anyhow::anyhow!("user not found in request context"))
    }
}

// ===== Fixtures =====

pub fn build_service(
    repo: Arc<MockSettingsRepo>,
    callers: Arc<MockCallerResolver>,
    options: ServiceOptions,
) -> Service {
    Service::new(repo, callers, options)
}

pub fn basic_stored() -> StoredWorkspaceSetting {
    StoredWorkspaceSetting::new(
        SettingKey::Basic,
        StoredSettingValue::Basic(BasicSetting {
            secret_key: "0f3a9c1e-secret".to_string(),
            schema_version: "0.22.0".to_string(),
        }),
    )
}

pub fn general_stored() -> StoredWorkspaceSetting {
    StoredWorkspaceSetting::new(
        SettingKey::General,
        StoredSettingValue::General(GeneralSetting {
            instance_url: "https://notes.example.org".to_string(),
            disallow_signup: true,
            custom_profile: Some(CustomProfile {
                title: "Team Notes".to_string(),
                locale: "en".to_string(),
                appearance: "dark".to_string(),
                ..CustomProfile::default()
            }),
            ..GeneralSetting::default()
        }),
    )
}

pub fn storage_stored() -> StoredWorkspaceSetting {
    StoredWorkspaceSetting::new(
        SettingKey::Storage,
        StoredSettingValue::Storage(StorageSetting {
            storage_type: workspace_settings::domain::stored::StorageType::Database,
            local_storage_path_template: "assets/{timestamp}_{filename}".to_string(),
            upload_size_limit_mb: 32,
            active_external_storage_id: None,
        }),
    )
}

pub fn memo_stored() -> StoredWorkspaceSetting {
    StoredWorkspaceSetting::new(
        SettingKey::MemoRelated,
        StoredSettingValue::MemoRelated(MemoRelatedSetting {
            disallow_public_visible: false,
            display_with_update_time: true,
        }),
    )
}

pub fn general_wire() -> WorkspaceSetting {
    WorkspaceSetting {
        name: "settings/GENERAL".to_string(),
        value: Some(WorkspaceSettingValue::GeneralSetting(WorkspaceGeneralSetting {
            instance_url: "https://memos.example.com".to_string(),
            disallow_signup: false,
            disallow_password_login: true,
            additional_script: String::new(),
            additional_style: ".memo { font-size: 15px }".to_string(),
            custom_profile: Some(WorkspaceCustomProfile {
                title: "Memos".to_string(),
                description: "Self-hosted notes".to_string(),
                logo_url: "/logo.webp".to_string(),
                locale: "de".to_string(),
                appearance: "system".to_string(),
            }),
        })),
    }
}
