//! Storage representation of workspace settings
//!
//! This is the persisted form. Payloads are keyed by [`SettingKey`] instead of
//! a resource name and serialize to camelCase JSON, one document per key.

use super::key::SettingKey;
use serde::{Deserialize, Serialize};

/// A stored workspace setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredWorkspaceSetting {
    pub key: SettingKey,
    pub value: Option<StoredSettingValue>,
}

/// Tagged union of persisted payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredSettingValue {
    Basic(BasicSetting),
    General(GeneralSetting),
    Storage(StorageSetting),
    MemoRelated(MemoRelatedSetting),
}

/// Instance bootstrap data, never exposed on the wire
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicSetting {
    pub secret_key: String,
    pub schema_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSetting {
    pub instance_url: String,
    pub disallow_signup: bool,
    pub disallow_password_login: bool,
    pub additional_script: String,
    pub additional_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_profile: Option<CustomProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomProfile {
    pub title: String,
    pub description: String,
    pub logo_url: String,
    pub locale: String,
    pub appearance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageType {
    #[default]
    #[serde(rename = "STORAGE_TYPE_UNSPECIFIED")]
    Unspecified,
    Database,
    Local,
    S3,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSetting {
    pub storage_type: StorageType,
    pub local_storage_path_template: String,
    pub upload_size_limit_mb: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_external_storage_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoRelatedSetting {
    pub disallow_public_visible: bool,
    pub display_with_update_time: bool,
}

impl StoredWorkspaceSetting {
    pub fn new(key: SettingKey, value: StoredSettingValue) -> Self {
        Self {
            key,
            value: Some(value),
        }
    }
}

impl StoredSettingValue {
    /// Serialize the payload alone; the key is stored next to it
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            StoredSettingValue::Basic(setting) => serde_json::to_value(setting),
            StoredSettingValue::General(setting) => serde_json::to_value(setting),
            StoredSettingValue::Storage(setting) => serde_json::to_value(setting),
            StoredSettingValue::MemoRelated(setting) => serde_json::to_value(setting),
        }
    }

    /// Decode a payload document according to the key it was stored under
    pub fn from_json(key: SettingKey, json: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match key {
            SettingKey::Basic => StoredSettingValue::Basic(serde_json::from_value(json)?),
            SettingKey::General => StoredSettingValue::General(serde_json::from_value(json)?),
            SettingKey::Storage => StoredSettingValue::Storage(serde_json::from_value(json)?),
            SettingKey::MemoRelated => {
                StoredSettingValue::MemoRelated(serde_json::from_value(json)?)
            }
        })
    }
}
