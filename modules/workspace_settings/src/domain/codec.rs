//! Conversion between the wire and storage representations
//!
//! Field copies are 1:1. An absent payload converts to an absent payload at
//! every level, including the nested custom profile. Nothing here validates or
//! clamps values.

use super::key::SettingKey;
use super::stored::{self, StoredSettingValue, StoredWorkspaceSetting};
use crate::contract::{
    SettingsError, StorageType, WorkspaceCustomProfile, WorkspaceGeneralSetting,
    WorkspaceMemoRelatedSetting, WorkspaceSetting, WorkspaceSettingValue, WorkspaceStorageSetting,
};
use serde::Deserialize;

/// What `setting_to_store` does with a key that has no wire payload, or with a
/// payload whose tag differs from the key in the resource name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedKeyPolicy {
    /// Fail with `InvalidArgument`
    #[default]
    Reject,
    /// Store whatever the general payload field holds (usually nothing) under
    /// the requested key; mismatched payloads are dropped. Kept for API
    /// compatibility with existing clients.
    LegacyGeneralFallback,
}

/// Convert a stored setting into its wire form
pub fn setting_to_wire(setting: StoredWorkspaceSetting) -> WorkspaceSetting {
    WorkspaceSetting {
        name: setting.key.resource_name(),
        value: setting.value.and_then(value_to_wire),
    }
}

fn value_to_wire(value: StoredSettingValue) -> Option<WorkspaceSettingValue> {
    match value {
        StoredSettingValue::General(setting) => {
            Some(WorkspaceSettingValue::GeneralSetting(setting.into()))
        }
        StoredSettingValue::Storage(setting) => {
            Some(WorkspaceSettingValue::StorageSetting(setting.into()))
        }
        StoredSettingValue::MemoRelated(setting) => {
            Some(WorkspaceSettingValue::MemoRelatedSetting(setting.into()))
        }
        // internal only
        StoredSettingValue::Basic(_) => None,
    }
}

/// Convert a wire setting into its storage form under `key`
pub fn setting_to_store(
    key: SettingKey,
    setting: WorkspaceSetting,
    policy: UnmatchedKeyPolicy,
) -> Result<StoredWorkspaceSetting, SettingsError> {
    let value = match key {
        SettingKey::General => match setting.value {
            Some(WorkspaceSettingValue::GeneralSetting(general)) => {
                Some(StoredSettingValue::General(general.into()))
            }
            other => unmatched_payload(key, other, policy)?,
        },
        SettingKey::Storage => match setting.value {
            Some(WorkspaceSettingValue::StorageSetting(storage)) => {
                Some(StoredSettingValue::Storage(storage.into()))
            }
            other => unmatched_payload(key, other, policy)?,
        },
        SettingKey::MemoRelated => match setting.value {
            Some(WorkspaceSettingValue::MemoRelatedSetting(memo)) => {
                Some(StoredSettingValue::MemoRelated(memo.into()))
            }
            other => unmatched_payload(key, other, policy)?,
        },
        // no wire category
        SettingKey::Basic => match policy {
            UnmatchedKeyPolicy::Reject => {
                return Err(SettingsError::invalid_argument(format!(
                    "workspace setting {} cannot be set",
                    key
                )));
            }
            UnmatchedKeyPolicy::LegacyGeneralFallback => match setting.value {
                Some(WorkspaceSettingValue::GeneralSetting(general)) => {
                    Some(StoredSettingValue::General(general.into()))
                }
                _ => None,
            },
        },
    };

    Ok(StoredWorkspaceSetting { key, value })
}

fn unmatched_payload(
    key: SettingKey,
    value: Option<WorkspaceSettingValue>,
    policy: UnmatchedKeyPolicy,
) -> Result<Option<StoredSettingValue>, SettingsError> {
    match (value, policy) {
        (None, _) | (Some(_), UnmatchedKeyPolicy::LegacyGeneralFallback) => Ok(None),
        (Some(other), UnmatchedKeyPolicy::Reject) => Err(SettingsError::invalid_argument(format!(
            "{} payload does not match workspace setting {}",
            payload_kind(&other),
            key
        ))),
    }
}

fn payload_kind(value: &WorkspaceSettingValue) -> &'static str {
    match value {
        WorkspaceSettingValue::GeneralSetting(_) => "generalSetting",
        WorkspaceSettingValue::StorageSetting(_) => "storageSetting",
        WorkspaceSettingValue::MemoRelatedSetting(_) => "memoRelatedSetting",
    }
}

// ===== Store -> wire =====

impl From<stored::GeneralSetting> for WorkspaceGeneralSetting {
    fn from(setting: stored::GeneralSetting) -> Self {
        Self {
            instance_url: setting.instance_url,
            disallow_signup: setting.disallow_signup,
            disallow_password_login: setting.disallow_password_login,
            additional_script: setting.additional_script,
            additional_style: setting.additional_style,
            custom_profile: setting.custom_profile.map(Into::into),
        }
    }
}

impl From<stored::CustomProfile> for WorkspaceCustomProfile {
    fn from(profile: stored::CustomProfile) -> Self {
        Self {
            title: profile.title,
            description: profile.description,
            logo_url: profile.logo_url,
            locale: profile.locale,
            appearance: profile.appearance,
        }
    }
}

impl From<stored::StorageType> for StorageType {
    fn from(storage_type: stored::StorageType) -> Self {
        match storage_type {
            stored::StorageType::Unspecified => StorageType::Unspecified,
            stored::StorageType::Database => StorageType::Database,
            stored::StorageType::Local => StorageType::Local,
            stored::StorageType::S3 => StorageType::S3,
        }
    }
}

impl From<stored::StorageSetting> for WorkspaceStorageSetting {
    fn from(setting: stored::StorageSetting) -> Self {
        Self {
            storage_type: setting.storage_type.into(),
            local_storage_path_template: setting.local_storage_path_template,
            upload_size_limit_mb: setting.upload_size_limit_mb,
            active_external_storage_id: setting.active_external_storage_id,
        }
    }
}

impl From<stored::MemoRelatedSetting> for WorkspaceMemoRelatedSetting {
    fn from(setting: stored::MemoRelatedSetting) -> Self {
        Self {
            disallow_public_visible: setting.disallow_public_visible,
            display_with_update_time: setting.display_with_update_time,
        }
    }
}

// ===== Wire -> store =====

impl From<WorkspaceGeneralSetting> for stored::GeneralSetting {
    fn from(setting: WorkspaceGeneralSetting) -> Self {
        Self {
            instance_url: setting.instance_url,
            disallow_signup: setting.disallow_signup,
            disallow_password_login: setting.disallow_password_login,
            additional_script: setting.additional_script,
            additional_style: setting.additional_style,
            custom_profile: setting.custom_profile.map(Into::into),
        }
    }
}

impl From<WorkspaceCustomProfile> for stored::CustomProfile {
    fn from(profile: WorkspaceCustomProfile) -> Self {
        Self {
            title: profile.title,
            description: profile.description,
            logo_url: profile.logo_url,
            locale: profile.locale,
            appearance: profile.appearance,
        }
    }
}

impl From<StorageType> for stored::StorageType {
    fn from(storage_type: StorageType) -> Self {
        match storage_type {
            StorageType::Unspecified => stored::StorageType::Unspecified,
            StorageType::Database => stored::StorageType::Database,
            StorageType::Local => stored::StorageType::Local,
            StorageType::S3 => stored::StorageType::S3,
        }
    }
}

impl From<WorkspaceStorageSetting> for stored::StorageSetting {
    fn from(setting: WorkspaceStorageSetting) -> Self {
        Self {
            storage_type: setting.storage_type.into(),
            local_storage_path_template: setting.local_storage_path_template,
            upload_size_limit_mb: setting.upload_size_limit_mb,
            active_external_storage_id: setting.active_external_storage_id,
        }
    }
}

impl From<WorkspaceMemoRelatedSetting> for stored::MemoRelatedSetting {
    fn from(setting: WorkspaceMemoRelatedSetting) -> Self {
        Self {
            disallow_public_visible: setting.disallow_public_visible,
            display_with_update_time: setting.display_with_update_time,
        }
    }
}
