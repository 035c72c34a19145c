//! REST DTOs with serde derives for HTTP API
//!
//! JSON follows protobuf-JSON conventions: camelCase fields, enum values as
//! SCREAMING_SNAKE_CASE strings, absent payloads omitted.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Workspace setting as exchanged over HTTP
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettingDto {
    /// Resource name; may be omitted on PATCH
    #[schema(example = "settings/GENERAL")]
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_setting: Option<GeneralSettingDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_setting: Option<StorageSettingDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo_related_setting: Option<MemoRelatedSettingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettingDto {
    #[schema(example = "https://memos.example.com")]
    pub instance_url: String,
    pub disallow_signup: bool,
    pub disallow_password_login: bool,
    pub additional_script: String,
    pub additional_style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_profile: Option<CustomProfileDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomProfileDto {
    pub title: String,
    pub description: String,
    pub logo_url: String,
    #[schema(example = "en")]
    pub locale: String,
    #[schema(example = "system")]
    pub appearance: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageTypeDto {
    #[default]
    #[serde(rename = "STORAGE_TYPE_UNSPECIFIED")]
    Unspecified,
    Database,
    Local,
    S3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSettingDto {
    pub storage_type: StorageTypeDto,
    #[schema(example = "assets/{timestamp}_{filename}")]
    pub local_storage_path_template: String,
    pub upload_size_limit_mb: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_external_storage_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoRelatedSettingDto {
    pub disallow_public_visible: bool,
    pub display_with_update_time: bool,
}

/// List response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListWorkspaceSettingsResponse {
    pub settings: Vec<WorkspaceSettingDto>,
}
