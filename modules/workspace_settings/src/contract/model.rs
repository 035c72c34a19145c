//! Contract models for workspace settings (wire representation)
//!
//! These are the shapes exchanged with API callers. A setting is addressed by
//! its resource name (`settings/<KEY>`) and carries at most one typed payload.
//! NO serde derives - the REST layer has its own DTOs.

/// A workspace setting as seen by API callers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceSetting {
    /// Resource name, e.g. `settings/GENERAL`
    pub name: String,
    /// Typed payload; `None` when nothing is populated
    pub value: Option<WorkspaceSettingValue>,
}

/// Tagged union of externally visible setting payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceSettingValue {
    GeneralSetting(WorkspaceGeneralSetting),
    StorageSetting(WorkspaceStorageSetting),
    MemoRelatedSetting(WorkspaceMemoRelatedSetting),
}

impl WorkspaceSetting {
    pub fn general_setting(&self) -> Option<&WorkspaceGeneralSetting> {
        match &self.value {
            Some(WorkspaceSettingValue::GeneralSetting(setting)) => Some(setting),
            _ => None,
        }
    }

    pub fn storage_setting(&self) -> Option<&WorkspaceStorageSetting> {
        match &self.value {
            Some(WorkspaceSettingValue::StorageSetting(setting)) => Some(setting),
            _ => None,
        }
    }

    pub fn memo_related_setting(&self) -> Option<&WorkspaceMemoRelatedSetting> {
        match &self.value {
            Some(WorkspaceSettingValue::MemoRelatedSetting(setting)) => Some(setting),
            _ => None,
        }
    }
}

/// General instance settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceGeneralSetting {
    /// Public URL of the instance
    pub instance_url: String,
    pub disallow_signup: bool,
    pub disallow_password_login: bool,
    /// Script injected into every page
    pub additional_script: String,
    /// Stylesheet injected into every page
    pub additional_style: String,
    pub custom_profile: Option<WorkspaceCustomProfile>,
}

/// Branding shown to visitors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceCustomProfile {
    pub title: String,
    pub description: String,
    pub logo_url: String,
    pub locale: String,
    pub appearance: String,
}

/// Where uploaded resources are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageType {
    #[default]
    Unspecified,
    Database,
    Local,
    S3,
}

/// Resource storage settings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceStorageSetting {
    pub storage_type: StorageType,
    /// Path template for local storage, e.g. `assets/{timestamp}_{filename}`
    pub local_storage_path_template: String,
    /// Upload size limit in megabytes
    pub upload_size_limit_mb: i64,
    /// Identifier of the active external storage, if any
    pub active_external_storage_id: Option<i32>,
}

/// Memo display and visibility settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkspaceMemoRelatedSetting {
    pub disallow_public_visible: bool,
    pub display_with_update_time: bool,
}

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Instance owner; the only role allowed to change workspace settings
    Host,
    Admin,
    User,
}

/// The resolved acting user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// Request-scoped information used to resolve the acting user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallerContext {
    /// Opaque access token taken from the transport, if any
    pub access_token: Option<String>,
}

impl CallerContext {
    /// Context with no credentials attached
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context carrying an access token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }
}
